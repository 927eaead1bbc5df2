//! バックエンドとのワイヤ契約

use serde::Serialize;

use crate::types::OptionId;

pub const QUERY_PATH: &str = "/api/query";
pub const CONFIRM_PATH: &str = "/api/confirm";
pub const SCREENSHOT_PREFIX: &str = "/api/screenshot/";

/// `POST /api/query` のボディ
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub query: &'a str,
}

/// `POST /api/confirm` のボディ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfirmRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmation_id: Option<String>,
    pub selected_option: OptionId,
}

/// スクリーンショット取得パス（ファイル名はパーセントエンコード）
pub fn screenshot_path(filename: &str) -> String {
    format!("{}{}", SCREENSHOT_PREFIX, urlencoding::encode(filename))
}

/// ベースURLとパスを連結
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
