//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **AppendLogEntryUseCase**: 作業ログ1件の追記

pub mod append_log_entry;
