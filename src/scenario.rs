//! シナリオ一括実行とMarkdownレポート
//!
//! シナリオファイルは `[{"title": ..., "query": ..., "confirm_choice": 2}]` 形式。
//! 1件の失敗で止めず、結果をレポートに記録して次へ進む。

use crate::client::ApiClient;
use crate::error::{ConsoleError, Result};
use costchecker_common::{ConfirmRequest, QueryOutcome, QueryResponse};
use indicatif::ProgressBar;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt::{Display, Write};
use std::path::Path;
use tracing::{info, warn};

/// `result_text` をレポートに載せる最大行数
const RESULT_TEXT_LINES: usize = 20;

pub const REPORT_TITLE: &str = "场景测试结果";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Scenario {
    pub title: Option<String>,
    /// `null` は空文字として扱う
    #[serde(deserialize_with = "null_as_empty")]
    pub query: String,
    /// 自動確認で選ぶ候補番号（1始まり、0は未指定扱い）
    pub confirm_choice: Option<usize>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Scenario {
    /// 自動確認で選ぶ候補番号（未指定・0なら1番目）
    pub fn choice(&self) -> usize {
        self.confirm_choice.filter(|&c| c > 0).unwrap_or(1)
    }

    pub fn display_title(&self, index: usize) -> String {
        self.title
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| format!("用例 {}", index))
    }
}

pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>> {
    let content = std::fs::read_to_string(path)?;
    parse_scenarios(&content)
}

pub fn parse_scenarios(content: &str) -> Result<Vec<Scenario>> {
    let value: Value = serde_json::from_str(content)?;
    if !value.is_array() {
        return Err(ConsoleError::InvalidScenarios("必须是JSON数组".into()));
    }
    Ok(serde_json::from_value(value)?)
}

/// 確認待ち応答から自動確認のリクエストを作る
///
/// 候補が空、確認IDがない、番号が範囲外なら `None`。
pub fn auto_selection(response: &QueryResponse, choice: Option<usize>) -> Option<ConfirmRequest> {
    let QueryOutcome::NeedsConfirmation { confirmation_id, options } = &response.outcome else {
        return None;
    };
    let confirmation_id = confirmation_id.as_ref()?;
    let index = choice.unwrap_or(1).checked_sub(1)?;
    options.get(index).map(|o| ConfirmRequest {
        confirmation_id: Some(confirmation_id.clone()),
        selected_option: o.id.clone(),
    })
}

/// Markdownレポートの組み立て
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    buf: String,
}

impl ScenarioReport {
    pub fn new(title: &str, timestamp: &str) -> Self {
        let mut buf = String::new();
        let _ = write!(buf, "# {}\n\n时间: {}\n\n", title, timestamp);
        Self { buf }
    }

    pub fn case_header(&mut self, index: usize, scenario: &Scenario) {
        let _ = writeln!(self.buf, "## {}) {}", index, scenario.display_title(index));
        let _ = writeln!(self.buf, "- 请求: `{}`", scenario.query);
    }

    pub fn request_failed(&mut self, error: &dyn Display) {
        let _ = write!(self.buf, "- 状态: request_failed ({})\n\n", error);
    }

    pub fn response(&mut self, response: &QueryResponse) {
        match response.error_type() {
            Some(et) => {
                let _ = write!(self.buf, "- 状态: {} ({})\n\n", response.status_text(), et);
            }
            None => {
                let _ = write!(self.buf, "- 状态: {}\n\n", response.status_text());
            }
        }
        self.json_block(&response.raw);
        if let Some(text) = response.result_text() {
            self.result_text("**result_text（前若干行）**", text);
        }
    }

    pub fn auto_confirm(&mut self, choice: usize) {
        let _ = write!(self.buf, "- 自动确认选项: {}\n\n", choice);
    }

    pub fn confirm_skipped(&mut self, choice: usize) {
        let _ = write!(self.buf, "- 自动确认跳过: 选项 {} 不存在\n\n", choice);
    }

    pub fn confirm_response(&mut self, response: &QueryResponse) {
        self.json_block(&response.raw);
        if let Some(text) = response.result_text() {
            self.result_text("**确认后 result_text（前若干行）**", text);
        }
    }

    pub fn confirm_failed(&mut self, error: &dyn Display) {
        let _ = write!(self.buf, "- 确认失败: {}\n\n", error);
    }

    pub fn finish(self) -> String {
        self.buf
    }

    fn json_block(&mut self, value: &Value) {
        let _ = write!(self.buf, "```json\n{}\n```\n\n", value);
    }

    fn result_text(&mut self, heading: &str, text: &str) {
        let _ = write!(self.buf, "{}\n\n", heading);
        for line in text.lines().take(RESULT_TEXT_LINES) {
            let _ = writeln!(self.buf, "    {}", line);
        }
        self.buf.push('\n');
    }
}

/// 全シナリオを順に実行してレポート本文を返す
pub async fn run_scenarios(
    client: &ApiClient,
    scenarios: &[Scenario],
    auto_confirm: bool,
    timestamp: &str,
    progress: &ProgressBar,
) -> String {
    let mut report = ScenarioReport::new(REPORT_TITLE, timestamp);

    for (i, scenario) in scenarios.iter().enumerate() {
        let index = i + 1;
        progress.set_message(scenario.display_title(index));
        report.case_header(index, scenario);

        let response = match client.query(&scenario.query).await {
            Ok(response) => response,
            Err(e) => {
                warn!(index, error = %e, "query failed");
                report.request_failed(&e);
                progress.inc(1);
                continue;
            }
        };
        info!(index, status = %response.status_text(), "query done");
        report.response(&response);

        if auto_confirm && matches!(response.outcome, QueryOutcome::NeedsConfirmation { .. }) {
            let choice = scenario.choice();
            match auto_selection(&response, Some(choice)) {
                Some(request) => {
                    report.auto_confirm(choice);
                    match client.confirm(&request).await {
                        Ok(final_response) => report.confirm_response(&final_response),
                        Err(e) => {
                            warn!(index, error = %e, "confirm failed");
                            report.confirm_failed(&e);
                        }
                    }
                }
                None => report.confirm_skipped(choice),
            }
        }

        progress.inc(1);
    }

    progress.finish_and_clear();
    report.finish()
}
