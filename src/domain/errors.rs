//! # Domain Errors
//!
//! ドメイン層のエラー定義

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DevlogError {
    /// 現在時刻を期待するタイムゾーン・形式で扱えない（致命的、書き込み前に中断）
    #[error("Clock error: {0}")]
    Clock(String),

    /// 直前の行の日付・時刻が読めない（経過時間は不明として扱う）
    #[error("Malformed previous row: {0}")]
    MalformedPreviousRow(String),
}
