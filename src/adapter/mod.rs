//! Adapter Layer
//!
//! 外部システム（Google Sheets, 設定ファイル, システム時計）との統合

pub mod clock;
pub mod config;
pub mod repositories;
pub mod sheets;
