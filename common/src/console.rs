//! QueryConsole の画面状態
//!
//! DOMに依存しない状態遷移。WASM側はこの状態をシグナルとして保持し、
//! 各領域（ステータス行・JSON欄・確認パネル・画像とオーバーレイ）へ描画する。
//!
//! リクエストの世代管理はしない。後から完了した応答が表示を上書きする。

use crate::api::{screenshot_path, ConfirmRequest};
use crate::error::Error;
use crate::format::{pretty, FAILED_STATUS, PENDING_STATUS};
use crate::overlay::{layout_overlays, ImageMetrics, OverlayLayout};
use crate::types::{ConfirmOption, Highlight, OptionId, QueryOutcome, QueryResponse};

/// 確認待ちの候補一覧
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub confirmation_id: Option<String>,
    pub options: Vec<ConfirmOption>,
}

/// 表示中のスクリーンショット
#[derive(Debug, Clone, PartialEq)]
pub struct Screenshot {
    /// `<img>` の src
    pub src: String,
    pub highlights: Vec<Highlight>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsoleState {
    pub status: String,
    pub json: String,
    pub confirmation: Option<Confirmation>,
    pub screenshot: Option<Screenshot>,
    pub overlays: Option<OverlayLayout>,
}

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 問い合わせ開始。画像は応答が届くまで残す
    pub fn begin_query(&mut self) {
        self.status = PENDING_STATUS.to_string();
        self.json.clear();
        self.confirmation = None;
        self.overlays = None;
    }

    /// `/api/query` の結果を反映
    pub fn apply_query(&mut self, result: Result<QueryResponse, Error>) {
        let response = match result {
            Ok(response) => response,
            Err(e) => return self.fail(&e),
        };

        self.show_response(&response);

        match response.outcome {
            QueryOutcome::NeedsConfirmation { confirmation_id, options } => {
                self.confirmation = Some(Confirmation { confirmation_id, options });
                self.show_screenshot(None, Vec::new());
            }
            QueryOutcome::Success { screenshot_url, highlights } => {
                self.show_screenshot(screenshot_url.as_deref(), highlights);
            }
            QueryOutcome::Other { .. } => {
                self.show_screenshot(None, Vec::new());
            }
        }
    }

    /// `/api/confirm` の結果を反映
    ///
    /// 失敗時は確認パネルを残し、再選択できるようにする。
    pub fn apply_confirm(&mut self, result: Result<QueryResponse, Error>) {
        let response = match result {
            Ok(response) => response,
            Err(e) => return self.fail(&e),
        };

        self.show_response(&response);
        let screenshot_url = response.screenshot_url();
        self.show_screenshot(screenshot_url.as_deref(), response.highlights());
        self.confirmation = None;
    }

    /// クリックされた候補の確認リクエスト。確認待ちでない・未知のIDなら `None`
    pub fn selection(&self, option_id: &OptionId) -> Option<ConfirmRequest> {
        let confirmation = self.confirmation.as_ref()?;
        confirmation
            .options
            .iter()
            .find(|o| &o.id == option_id)
            .map(|o| ConfirmRequest {
                confirmation_id: confirmation.confirmation_id.clone(),
                selected_option: o.id.clone(),
            })
    }

    /// ファイル名がなければ画像を外す。ある場合は読込完了後に配置する
    pub fn show_screenshot(&mut self, filename: Option<&str>, highlights: Vec<Highlight>) {
        self.overlays = None;
        self.screenshot = filename.filter(|f| !f.is_empty()).map(|f| Screenshot {
            src: screenshot_path(f),
            highlights,
        });
    }

    /// 画像の load イベント
    pub fn image_loaded(&mut self, metrics: ImageMetrics) {
        self.overlays = self
            .screenshot
            .as_ref()
            .and_then(|shot| layout_overlays(&shot.highlights, metrics));
    }

    pub fn screenshot_src(&self) -> Option<&str> {
        self.screenshot.as_ref().map(|s| s.src.as_str())
    }

    fn show_response(&mut self, response: &QueryResponse) {
        self.json = pretty(&response.raw);
        self.status = response.status_text().to_string();
    }

    fn fail(&mut self, error: &Error) {
        self.status = FAILED_STATUS.to_string();
        self.json = error.to_string();
        self.overlays = None;
    }
}
