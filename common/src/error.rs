//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// 画面上はネットワーク障害・HTTPエラー・JSON不正を区別せず、
/// Displayをそのまま表示する。
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("{0}")]
    Transport(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
