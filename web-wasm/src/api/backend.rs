//! `/api/query` と `/api/confirm` への POST
//!
//! 同一オリジンの相対パスに送る。再試行・キャンセルはしない。

use costchecker_common::api::{CONFIRM_PATH, QUERY_PATH};
use costchecker_common::{ConfirmRequest, Error, QueryRequest, QueryResponse, Result};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// 問い合わせ
pub async fn query(text: &str) -> Result<QueryResponse> {
    post_json(QUERY_PATH, &QueryRequest { query: text }).await
}

/// 確認候補の選択
pub async fn confirm(request: &ConfirmRequest) -> Result<QueryResponse> {
    post_json(CONFIRM_PATH, request).await
}

/// JSONをPOSTし、2xxの応答本文をJSONとして返す
async fn post_json<T: Serialize>(path: &str, body: &T) -> Result<QueryResponse> {
    let body = serde_json::to_string(body)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(path, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        gloo::console::warn!(format!("POST {} -> HTTP {}", path, resp.status()));
        return Err(Error::Http { status: resp.status() });
    }

    // 数値の精度を保つため JSON.parse ではなく serde_json で読む
    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();
    let raw: Value = serde_json::from_str(&text)?;

    gloo::console::debug!(format!(
        "POST {} -> {}",
        path,
        raw.get("status").unwrap_or(&Value::Null)
    ));
    Ok(QueryResponse::from_value(raw))
}

/// JS例外を `String(e)` 相当の文字列にする
pub fn js_error(value: JsValue) -> Error {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        let name = String::from(err.name());
        let message = String::from(err.message());
        return Error::Transport(format!("{}: {}", name, message));
    }
    let text = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    Error::Transport(text)
}
