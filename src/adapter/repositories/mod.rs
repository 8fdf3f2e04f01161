//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod google_sheets_log_repository;
