//! CostChecker Console Common Library
//!
//! ブラウザ版(WASM)とCLIで共有される型とロジック

pub mod types;
pub mod api;
pub mod error;
pub mod format;
pub mod highlight;
pub mod overlay;
pub mod console;

pub use types::{ConfirmOption, Highlight, HighlightKind, OptionId, QueryOutcome, QueryResponse};
pub use api::{endpoint, screenshot_path, ConfirmRequest, QueryRequest};
pub use error::{Error, Result};
pub use format::{confidence_percent, option_label, pretty};
pub use highlight::extract_highlights;
pub use overlay::{layout_overlays, ImageMetrics, OverlayBox, OverlayLayout};
pub use console::{Confirmation, ConsoleState, Screenshot};
