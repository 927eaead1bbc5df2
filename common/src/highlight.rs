//! 応答 `data` からの強調矩形抽出

use serde::Deserialize;
use serde_json::Value;

use crate::types::Highlight;

/// `data.highlights`（配列）を優先し、なければ `data.highlight`（単体）を
/// 1要素の配列に包む。どちらもなければ空。
///
/// 読めない要素は読み飛ばす。
pub fn extract_highlights(data: Option<&Value>) -> Vec<Highlight> {
    let Some(data) = data else {
        return Vec::new();
    };

    if let Some(items) = data.get("highlights").and_then(Value::as_array) {
        return items
            .iter()
            .filter_map(|item| Highlight::deserialize(item).ok())
            .collect();
    }

    data.get("highlight")
        .filter(|v| v.is_object())
        .and_then(|v| Highlight::deserialize(v).ok())
        .into_iter()
        .collect()
}
