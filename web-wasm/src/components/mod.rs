//! UIコンポーネント

pub mod header;
pub mod query_bar;
pub mod result_pane;
pub mod confirm_panel;
pub mod screenshot_view;
