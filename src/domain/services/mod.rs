//! # Domain Services
//!
//! エンティティにまたがるビジネスルール
//!
//! - **elapsed_time**: 直前の行からの経過分数
//! - **session_row_resolver**: 直前の行と入力から追記する行を決定する

pub mod elapsed_time;
pub mod session_row_resolver;
