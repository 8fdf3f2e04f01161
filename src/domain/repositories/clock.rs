//! # Clock Trait
//!
//! 現在時刻の取得を抽象化（テストで固定時刻を注入するため）

use chrono::DateTime;
use chrono_tz::Tz;

/// 時計
///
/// 設定されたタイムゾーンでの現在時刻を返す
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Tz>;
}
