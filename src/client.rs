//! バックエンドHTTPクライアント
//!
//! ブラウザ版と同じ2つのPOSTと1つのGETだけを使う。

use crate::config::Config;
use crate::error::Result;
use costchecker_common::api::{CONFIRM_PATH, QUERY_PATH};
use costchecker_common::{endpoint, screenshot_path, ConfirmRequest, QueryRequest, QueryResponse};
use serde::Serialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            base: config.api_base.clone(),
        })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub async fn query(&self, text: &str) -> Result<QueryResponse> {
        self.post_json(QUERY_PATH, &QueryRequest { query: text }).await
    }

    pub async fn confirm(&self, request: &ConfirmRequest) -> Result<QueryResponse> {
        self.post_json(CONFIRM_PATH, request).await
    }

    /// `GET /api/screenshot/{filename}` の画像バイト列
    pub async fn screenshot(&self, filename: &str) -> Result<Vec<u8>> {
        let url = endpoint(&self.base, &screenshot_path(filename));
        debug!(%url, "GET");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(costchecker_common::Error::Http { status: status.as_u16() }.into());
        }
        Ok(resp.bytes().await?.to_vec())
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<QueryResponse> {
        let url = endpoint(&self.base, path);
        debug!(%url, "POST");

        let resp = self.http.post(&url).json(body).send().await?;
        let status = resp.status();
        debug!(%url, status = status.as_u16(), "response");
        if !status.is_success() {
            return Err(costchecker_common::Error::Http { status: status.as_u16() }.into());
        }

        // JSONでない本文は {"raw": 本文} として扱う
        let text = resp.text().await?;
        let raw: Value = serde_json::from_str(&text).unwrap_or_else(|_| json!({ "raw": text }));
        Ok(QueryResponse::from_value(raw))
    }
}
