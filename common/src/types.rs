//! 応答モデルの型定義
//!
//! - QueryResponse: `/api/query` と `/api/confirm` の応答（生JSONを保持）
//! - QueryOutcome: `status` フィールドで分岐した応答の解釈
//! - ConfirmOption: 確認候補
//! - Highlight: スクリーンショット上の強調矩形

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::highlight::extract_highlights;

/// 確認候補のID（サーバーは文字列・数値どちらも返しうる）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionId::Number(n) => write!(f, "{}", n),
            OptionId::Text(s) => f.write_str(s),
        }
    }
}

/// 整数として読めれば `Number`、それ以外は `Text`
impl FromStr for OptionId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(n) => OptionId::Number(n),
            Err(_) => OptionId::Text(s.to_string()),
        })
    }
}

/// 確認候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmOption {
    pub id: OptionId,

    #[serde(default)]
    pub product_code: String,

    #[serde(default)]
    pub material: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// 0.0〜1.0
    #[serde(default)]
    pub confidence: f64,

    #[serde(default)]
    pub match_reason: Option<String>,
}

/// 強調矩形の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HighlightKind {
    Price,
    #[default]
    Other,
}

/// 強調矩形（元画像のピクセル座標）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,

    #[serde(rename = "type", default, deserialize_with = "deserialize_kind")]
    pub kind: HighlightKind,
}

fn deserialize_kind<'de, D>(deserializer: D) -> Result<HighlightKind, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value.as_ref().and_then(Value::as_str) {
        Some("price") => HighlightKind::Price,
        _ => HighlightKind::Other,
    })
}

/// `status` による応答の解釈
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    Success {
        screenshot_url: Option<String>,
        highlights: Vec<Highlight>,
    },
    NeedsConfirmation {
        confirmation_id: Option<String>,
        options: Vec<ConfirmOption>,
    },
    Other {
        status: Option<String>,
    },
}

impl QueryOutcome {
    pub fn from_value(raw: &Value) -> Self {
        match raw.get("status").and_then(Value::as_str) {
            Some("success") => QueryOutcome::Success {
                screenshot_url: screenshot_url(raw),
                highlights: extract_highlights(raw.get("data")),
            },
            Some("needs_confirmation") => QueryOutcome::NeedsConfirmation {
                confirmation_id: raw
                    .get("confirmation_id")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                options: decode_options(raw.get("options")),
            },
            other => QueryOutcome::Other {
                status: other.map(str::to_string),
            },
        }
    }
}

/// バックエンド応答
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResponse {
    /// 整形表示用の生JSON
    pub raw: Value,
    pub outcome: QueryOutcome,
}

impl QueryResponse {
    pub fn from_value(raw: Value) -> Self {
        let outcome = QueryOutcome::from_value(&raw);
        Self { raw, outcome }
    }

    /// ステータス行に出す文字列（`status` がなければ空、文字列以外はJSON表記）
    pub fn status_text(&self) -> Cow<'_, str> {
        match self.raw.get("status") {
            Some(Value::String(s)) => Cow::Borrowed(s),
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    pub fn error_type(&self) -> Option<&str> {
        self.raw.get("error_type").and_then(Value::as_str)
    }

    pub fn result_text(&self) -> Option<&str> {
        self.raw
            .get("result_text")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// statusに関係なく `screenshot_url` を読む（確認後の応答で使用）
    pub fn screenshot_url(&self) -> Option<String> {
        screenshot_url(&self.raw)
    }

    /// statusに関係なく `data` から強調矩形を読む
    pub fn highlights(&self) -> Vec<Highlight> {
        extract_highlights(self.raw.get("data"))
    }
}

fn screenshot_url(raw: &Value) -> Option<String> {
    raw.get("screenshot_url")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn decode_options(value: Option<&Value>) -> Vec<ConfirmOption> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| ConfirmOption::deserialize(item).ok())
                .collect()
        })
        .unwrap_or_default()
}
