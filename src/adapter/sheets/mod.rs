//! Google Sheets Adapter Modules
//!
//! Google Sheets API統合のためのアダプターモジュール

pub mod auth;
pub mod client;
