//! DOM要素からの寸法取得

use costchecker_common::ImageMetrics;
use web_sys::HtmlImageElement;

/// `naturalWidth` / `clientWidth` などを読む
pub fn image_metrics(img: &HtmlImageElement) -> ImageMetrics {
    ImageMetrics {
        natural_width: img.natural_width(),
        natural_height: img.natural_height(),
        client_width: img.client_width().max(0) as u32,
        client_height: img.client_height().max(0) as u32,
    }
}
