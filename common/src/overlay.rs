//! オーバーレイ矩形の配置計算
//!
//! 強調矩形は元画像（natural）のピクセル座標で届くため、
//! 表示サイズ（client）に合わせて単一の倍率で変換する。

use crate::types::{Highlight, HighlightKind};

/// 画像要素の寸法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImageMetrics {
    pub natural_width: u32,
    pub natural_height: u32,
    pub client_width: u32,
    pub client_height: u32,
}

impl ImageMetrics {
    /// 読み込み完了前は natural_width が 0
    pub fn is_loaded(&self) -> bool {
        self.natural_width > 0
    }

    pub fn scale(&self) -> f64 {
        f64::from(self.client_width) / f64::from(self.natural_width)
    }
}

/// 表示座標に変換済みの矩形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayBox {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
    pub kind: HighlightKind,
}

impl OverlayBox {
    pub fn class_name(&self) -> &'static str {
        match self.kind {
            HighlightKind::Price => "box price",
            HighlightKind::Other => "box",
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            self.left, self.top, self.width, self.height
        )
    }
}

/// オーバーレイ全体（コンテナ寸法 + 矩形）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    pub width: u32,
    pub height: u32,
    pub boxes: Vec<OverlayBox>,
}

impl OverlayLayout {
    pub fn container_style(&self) -> String {
        format!("width: {}px; height: {}px;", self.width, self.height)
    }
}

/// `Math.round` と同じ丸め（.5は正方向）
pub fn round_px(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// 強調矩形がない、または画像が未読込なら `None`
pub fn layout_overlays(highlights: &[Highlight], metrics: ImageMetrics) -> Option<OverlayLayout> {
    if highlights.is_empty() || !metrics.is_loaded() {
        return None;
    }

    let scale = metrics.scale();
    let boxes = highlights
        .iter()
        .map(|h| OverlayBox {
            left: round_px(h.x * scale),
            top: round_px(h.y * scale),
            width: round_px(h.w * scale),
            height: round_px(h.h * scale),
            kind: h.kind,
        })
        .collect();

    Some(OverlayLayout {
        width: metrics.client_width,
        height: metrics.client_height,
        boxes,
    })
}
