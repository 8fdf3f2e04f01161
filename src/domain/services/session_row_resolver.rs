//! # Session Row Resolver
//!
//! 直前の行・今回の入力・現在時刻から、追記する行を決定する純粋関数。
//! I/Oは行わない。

use chrono::DateTime;
use chrono_tz::Tz;
use log::{debug, info, warn};

use crate::domain::entities::log_row::LogRow;
use crate::domain::entities::session_input::{MinutesSpec, SessionInput};
use crate::domain::services::elapsed_time::elapsed_minutes;

/// 開いているセッションを閉じるログエントリ
pub const STOP_ENTRY: &str = "stop";

/// 複数行のメッセージを1つの引数に連結する際の区切り
const LINE_SEPARATOR: &str = "; ";

/// 解決結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// 追記する行
    Append {
        row: LogRow,
        /// 直前の行からの経過分数（最初の行、または直前の行が壊れている場合は `None`）
        elapsed_minutes: Option<i64>,
    },
    /// ログエントリが空なので何も追記しない
    Skip,
}

/// セッション行リゾルバ
pub struct SessionRowResolver;

impl SessionRowResolver {
    /// 追記する行を決定する
    ///
    /// # Arguments
    ///
    /// * `previous` - 現在保存されている最後の行（空のタブなら `None`）
    /// * `input` - 今回の呼び出しの入力
    /// * `now` - 現在時刻（設定されたタイムゾーン）
    pub fn resolve(
        previous: Option<&LogRow>,
        input: &SessionInput,
        now: &DateTime<Tz>,
    ) -> Resolution {
        if input.is_blank() {
            debug!("Empty log entry, nothing to append");
            return Resolution::Skip;
        }

        let (mut row, elapsed) = match previous {
            None => (Self::first_row(input), None),
            Some(previous) => Self::continue_from(previous, input, now),
        };

        row.log_entry = normalize_log_entry(&row.log_entry);
        row.stamp(now);

        debug!("Resolved row: {:?}", row);

        Resolution::Append {
            row,
            elapsed_minutes: elapsed,
        }
    }

    /// 最初の行: 経過時間は計算せず、入力をそのまま使う
    fn first_row(input: &SessionInput) -> LogRow {
        Self::from_input(input, explicit_minutes(&input.minutes_spent))
    }

    fn continue_from(
        previous: &LogRow,
        input: &SessionInput,
        now: &DateTime<Tz>,
    ) -> (LogRow, Option<i64>) {
        let elapsed = match previous.timestamp() {
            Ok(last) => {
                let minutes = elapsed_minutes(last, now.naive_local());
                info!("Minutes since last log entry: {}", minutes);
                Some(minutes)
            }
            Err(e) => {
                warn!("{}; minutes since last entry are unknown", e);
                None
            }
        };
        let elapsed_spent = elapsed.and_then(|m| u32::try_from(m).ok());

        let closes_session = input.log_entry == STOP_ENTRY && previous.log_entry != STOP_ENTRY;

        let row = if closes_session {
            Self::inherit_context(previous, elapsed_spent, STOP_ENTRY.to_string())
        } else {
            match &input.minutes_spent {
                MinutesSpec::ContinuePrevious => {
                    Self::inherit_context(previous, elapsed_spent, input.log_entry.clone())
                }
                MinutesSpec::Unspecified => Self::from_input(input, elapsed_spent),
                given => Self::from_input(input, explicit_minutes(given)),
            }
        };

        (row, elapsed)
    }

    /// コンテキスト5項目を直前の行から引き継ぐ
    fn inherit_context(previous: &LogRow, minutes_spent: Option<u32>, log_entry: String) -> LogRow {
        LogRow {
            client: previous.client.clone(),
            sub_client: previous.sub_client.clone(),
            host_machine: previous.host_machine.clone(),
            project: previous.project.clone(),
            ticket: previous.ticket.clone(),
            minutes_spent,
            log_entry,
            ..LogRow::default()
        }
    }

    fn from_input(input: &SessionInput, minutes_spent: Option<u32>) -> LogRow {
        LogRow {
            client: input.client.clone().unwrap_or_default(),
            sub_client: input.sub_client.clone().unwrap_or_default(),
            host_machine: input.host_machine.clone().unwrap_or_default(),
            project: input.project.clone().unwrap_or_default(),
            ticket: input.ticket.clone().unwrap_or_default(),
            minutes_spent,
            log_entry: input.log_entry.clone(),
            ..LogRow::default()
        }
    }
}

/// 明示された分数。数値以外は空として保存する
fn explicit_minutes(given: &MinutesSpec) -> Option<u32> {
    match given {
        MinutesSpec::Numeric(minutes) => Some(*minutes),
        MinutesSpec::Unparseable(raw) => {
            warn!("Minutes spent '{}' is not a number, storing it empty", raw);
            None
        }
        MinutesSpec::Unspecified | MinutesSpec::ContinuePrevious => None,
    }
}

/// `"; "` で連結された複数行メッセージを改行に戻す
pub fn normalize_log_entry(log_entry: &str) -> String {
    log_entry.replace(LINE_SEPARATOR, "\n")
}
