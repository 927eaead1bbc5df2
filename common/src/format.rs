//! 表示用の整形

use serde_json::Value;

use crate::types::ConfirmOption;

/// 問い合わせ中のステータス表示
pub const PENDING_STATUS: &str = "查询中...";

/// 通信失敗時のステータス表示
pub const FAILED_STATUS: &str = "请求失败";

/// 確認パネルの見出し
pub const CONFIRM_HEADING: &str = "请选择：";

/// インデント2のJSON。失敗時は文字列化にフォールバック
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// 0.87 → "87%"
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.0}%", (confidence * 100.0).round())
}

/// 確認候補の1行表示: "A1 · 硅胶 · 泳镜 (87%)"
pub fn option_label(option: &ConfirmOption) -> String {
    format!(
        "{} · {} · {} ({})",
        option.product_code,
        option.material.as_deref().unwrap_or(""),
        option.category.as_deref().unwrap_or(""),
        confidence_percent(option.confidence)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OptionId;
    use serde_json::json;

    #[test]
    fn test_pretty_indent() {
        let value = json!({ "status": "success" });
        assert_eq!(pretty(&value), "{\n  \"status\": \"success\"\n}");
    }

    #[test]
    fn test_pretty_keeps_server_key_order() {
        let value: Value = serde_json::from_str(
            r#"{"status":"success","result_text":"x","screenshot_url":"a.png","data":{"product_code":"A1","category":"泳镜"}}"#,
        )
        .unwrap();
        let text = pretty(&value);

        let status = text.find("\"status\"").unwrap();
        let result_text = text.find("\"result_text\"").unwrap();
        let screenshot = text.find("\"screenshot_url\"").unwrap();
        let data = text.find("\"data\"").unwrap();
        assert!(status < result_text && result_text < screenshot && screenshot < data);
        assert!(text.find("\"product_code\"").unwrap() < text.find("\"category\"").unwrap());
    }

    #[test]
    fn test_confidence_percent() {
        assert_eq!(confidence_percent(0.87), "87%");
        assert_eq!(confidence_percent(1.0), "100%");
        assert_eq!(confidence_percent(0.0), "0%");
        assert_eq!(confidence_percent(0.125), "13%");
    }

    #[test]
    fn test_option_label_full() {
        let option = ConfirmOption {
            id: OptionId::Number(1),
            product_code: "DM-100".to_string(),
            material: Some("硅胶".to_string()),
            category: Some("潜水镜".to_string()),
            confidence: 0.92,
            match_reason: None,
        };
        assert_eq!(option_label(&option), "DM-100 · 硅胶 · 潜水镜 (92%)");
    }

    #[test]
    fn test_option_label_missing_fields() {
        let option = ConfirmOption {
            id: OptionId::Number(1),
            product_code: "A1".to_string(),
            material: None,
            category: None,
            confidence: 0.87,
            match_reason: None,
        };
        assert_eq!(option_label(&option), "A1 ·  ·  (87%)");
    }
}
