//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **LogRow**: スプレッドシートに保存される1行
//! - **SessionInput**: 1回の呼び出しで渡される作業セッションの記述
//! - **SheetTab**: 書き込み先のスプレッドシートとタブ

pub mod log_row;
pub mod session_input;
pub mod sheet_tab;
