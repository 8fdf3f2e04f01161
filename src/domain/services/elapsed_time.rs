//! # Elapsed Time
//!
//! 直前のログ行から現在までの経過分数の計算

use chrono::{NaiveDateTime, Timelike};

/// この時間数を超える間隔は信頼できないとみなす（セッションを閉じ忘れた等）
pub const STALE_GAP_HOURS: i64 = 6;

/// 信頼できない間隔の代わりに記録する分数
pub const STALE_GAP_MINUTES: i64 = 10;

/// `previous` から `now` までの経過分数を返す
///
/// `now` は分単位に切り捨ててから比較する（保存される時刻は分までしか持たない）。
/// 日数×1440 + 時間×60 + 分の絶対値。間隔の時間部分が [`STALE_GAP_HOURS`] を
/// 超える場合は [`STALE_GAP_MINUTES`] を返す。
pub fn elapsed_minutes(previous: NaiveDateTime, now: NaiveDateTime) -> i64 {
    let now = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    let minutes = (now - previous).num_minutes().abs();

    if minutes / 60 > STALE_GAP_HOURS {
        STALE_GAP_MINUTES
    } else {
        minutes
    }
}
