//! HTTPクライアントのテスト
//!
//! ローカルのTCPリスナーをバックエンドに見立てて検証

mod support;

use costchecker_common::{ConfirmRequest, OptionId, QueryOutcome};
use costchecker_console::client::ApiClient;
use costchecker_console::config::Config;
use costchecker_console::error::ConsoleError;
use support::{mock_backend, MockResponse};

fn client_for(base: &str) -> ApiClient {
    let config = Config {
        api_base: base.to_string(),
        timeout_seconds: 5,
    };
    ApiClient::new(&config).expect("client build failed")
}

/// 問い合わせはJSONボディでPOSTされ、応答が解釈される
#[tokio::test]
async fn test_query_posts_json() {
    let (base, server) = mock_backend(vec![MockResponse::json(
        200,
        r#"{"status":"success","screenshot_url":"shot1.png","data":{"highlight":{"x":10,"y":20,"w":30,"h":40}}}"#,
    )])
    .await;

    let response = client_for(&base).query("A1 价格").await.expect("query failed");
    match &response.outcome {
        QueryOutcome::Success { screenshot_url, highlights } => {
            assert_eq!(screenshot_url.as_deref(), Some("shot1.png"));
            assert_eq!(highlights.len(), 1);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("POST /api/query "));
    assert!(requests[0].to_lowercase().contains("content-type: application/json"));
    assert!(requests[0].ends_with(r#"{"query":"A1 价格"}"#));
}

/// 確認リクエストのボディ
#[tokio::test]
async fn test_confirm_posts_selection() {
    let (base, server) = mock_backend(vec![MockResponse::json(200, r#"{"status":"success","data":{}}"#)]).await;

    let request = ConfirmRequest {
        confirmation_id: Some("conf-1".to_string()),
        selected_option: OptionId::Text("2".to_string()),
    };
    let response = client_for(&base).confirm(&request).await.expect("confirm failed");
    assert_eq!(response.status_text(), "success");

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("POST /api/confirm "));
    assert!(requests[0].ends_with(r#"{"confirmation_id":"conf-1","selected_option":"2"}"#));
}

/// 2xx以外は `HTTP <status>` エラー
#[tokio::test]
async fn test_non_success_status() {
    let (base, _server) = mock_backend(vec![MockResponse::json(
        404,
        r#"{"status":"error","error_type":"not_found","message":"Not Found"}"#,
    )])
    .await;

    let err = client_for(&base).query("x").await.unwrap_err();
    assert!(matches!(
        err,
        ConsoleError::Common(costchecker_common::Error::Http { status: 404 })
    ));
    assert_eq!(err.to_string(), "HTTP 404");
}

/// JSONでない本文は raw として保持
#[tokio::test]
async fn test_non_json_body_is_wrapped() {
    let (base, _server) = mock_backend(vec![MockResponse::json(200, "plain text")]).await;

    let response = client_for(&base).query("x").await.expect("query failed");
    assert_eq!(response.raw["raw"], "plain text");
    assert!(matches!(response.outcome, QueryOutcome::Other { status: None }));
}

/// 接続できない場合は通信エラー
#[tokio::test]
async fn test_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = client_for(&base).query("x").await.unwrap_err();
    assert!(matches!(err, ConsoleError::Request(_)));
}

/// スクリーンショットはファイル名をエンコードしてGET
#[tokio::test]
async fn test_screenshot_get() {
    let (base, server) = mock_backend(vec![MockResponse::bytes("image/png", vec![1, 2, 3])]).await;

    let bytes = client_for(&base).screenshot("价目表 1.png").await.expect("screenshot failed");
    assert_eq!(bytes, vec![1, 2, 3]);

    let requests = server.await.unwrap();
    assert!(requests[0].starts_with("GET /api/screenshot/%E4%BB%B7%E7%9B%AE%E8%A1%A8%201.png "));
}
