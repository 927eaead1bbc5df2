//! CostChecker 查询控制台
//!
//! `/api/query`・`/api/confirm`・`/api/screenshot` を端末から使うためのライブラリ部

pub mod annotate;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod scenario;
