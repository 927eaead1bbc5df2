//! スクリーンショットへの強調矩形の描き込み
//!
//! 座標は元画像ピクセルなので倍率1でオーバーレイ配置を流用する。

use crate::error::Result;
use costchecker_common::{layout_overlays, Highlight, HighlightKind, ImageMetrics, OverlayBox};
use image::{Rgba, RgbaImage};
use std::path::Path;

pub const PRICE_COLOR: Rgba<u8> = Rgba([255, 59, 48, 255]);
pub const DEFAULT_COLOR: Rgba<u8> = Rgba([10, 132, 255, 255]);
const THICKNESS: u32 = 3;

/// 画像バイト列に矩形を描いて `out_path` に保存。描いた矩形数を返す
pub fn annotate_screenshot(bytes: &[u8], highlights: &[Highlight], out_path: &Path) -> Result<usize> {
    let mut img = image::load_from_memory(bytes)?.to_rgba8();
    let drawn = draw_highlights(&mut img, highlights);

    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    img.save(out_path)?;
    Ok(drawn)
}

pub fn draw_highlights(img: &mut RgbaImage, highlights: &[Highlight]) -> usize {
    let metrics = ImageMetrics {
        natural_width: img.width(),
        natural_height: img.height(),
        client_width: img.width(),
        client_height: img.height(),
    };
    let Some(layout) = layout_overlays(highlights, metrics) else {
        return 0;
    };

    layout
        .boxes
        .iter()
        .filter(|b| draw_box(img, b))
        .count()
}

fn draw_box(img: &mut RgbaImage, b: &OverlayBox) -> bool {
    let color = match b.kind {
        HighlightKind::Price => PRICE_COLOR,
        HighlightKind::Other => DEFAULT_COLOR,
    };

    // 画像外にはみ出す分は切り詰める（i32の端でも桁あふれしないようi64で計算）
    let (img_w, img_h) = (i64::from(img.width()), i64::from(img.height()));
    let (left, top) = (i64::from(b.left), i64::from(b.top));
    let x = left.max(0);
    let y = top.max(0);
    let w = (i64::from(b.width) - (x - left)).min(img_w - x);
    let h = (i64::from(b.height) - (y - top)).min(img_h - y);
    if w <= 0 || h <= 0 {
        return false;
    }

    // 上の切り詰めで 0 <= x < img_w, 0 < w <= img_w - x が保証される
    draw_rect_outline(img, x as u32, y as u32, w as u32, h as u32, color, THICKNESS);
    true
}

fn draw_rect_outline(
    img: &mut RgbaImage,
    x: u32,
    y: u32,
    w: u32,
    h: u32,
    color: Rgba<u8>,
    thickness: u32,
) {
    let max_x = img.width().saturating_sub(1);
    let max_y = img.height().saturating_sub(1);

    let x1 = x.saturating_add(w - 1).min(max_x);
    let y1 = y.saturating_add(h - 1).min(max_y);

    // 内側に向かって太くする
    for t in 0..thickness.max(1) {
        let tx0 = (x + t).min(x1);
        let ty0 = (y + t).min(y1);
        let tx1 = x1.saturating_sub(t).max(tx0);
        let ty1 = y1.saturating_sub(t).max(ty0);

        for xx in tx0..=tx1 {
            img.put_pixel(xx, ty0, color);
            img.put_pixel(xx, ty1, color);
        }
        for yy in ty0..=ty1 {
            img.put_pixel(tx0, yy, color);
            img.put_pixel(tx1, yy, color);
        }
    }
}
