//! # LogRow Entity
//!
//! スプレッドシートに保存される作業ログの1行

use chrono::{DateTime, NaiveDateTime, TimeZone};
use serde_json::Value;

use crate::domain::errors::DevlogError;

/// 日付の保存形式（例: "Mon, Jan 1, 2024"）
pub const DATE_FORMAT: &str = "%a, %b %-d, %Y";

/// 時刻の保存形式（24時間表記、例: "09:45"）
pub const TIME_FORMAT: &str = "%H:%M";

/// 日付と時刻を連結した文字列の解析用形式
const TIMESTAMP_PARSE_FORMAT: &str = "%a, %b %d, %Y %H:%M";

/// 作業ログの1行
///
/// 一度追記された行は変更されない（追記のみのテーブル）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogRow {
    pub date: String,
    pub time: String,
    pub client: String,
    pub sub_client: String,
    pub host_machine: String,
    pub project: String,
    pub ticket: String,
    /// 経過分数。不明・不正な値は `None`（空セルとして保存）
    pub minutes_spent: Option<u32>,
    pub log_entry: String,
}

impl LogRow {
    /// ヘッダー行（保存される列の順序）
    pub const HEADER: [&'static str; 9] = [
        "Date",
        "Time",
        "Client",
        "Sub Client",
        "Host Machine",
        "Project",
        "Ticket",
        "Minutes Spent",
        "Log Entry",
    ];

    /// ヘッダー行を `String` のベクタとして返す
    pub fn header() -> Vec<String> {
        Self::HEADER.iter().map(|title| title.to_string()).collect()
    }

    /// 日付と時刻を指定の時刻から設定する
    pub fn stamp<Tz: TimeZone>(&mut self, now: &DateTime<Tz>)
    where
        Tz::Offset: std::fmt::Display,
    {
        self.date = now.format(DATE_FORMAT).to_string();
        self.time = now.format(TIME_FORMAT).to_string();
    }

    /// 保存された日付・時刻を壁時計の時刻として解析する
    ///
    /// # Errors
    ///
    /// 日付または時刻が空、あるいは形式に合わない場合に
    /// `DevlogError::MalformedPreviousRow` を返す
    pub fn timestamp(&self) -> Result<NaiveDateTime, DevlogError> {
        if self.date.trim().is_empty() || self.time.trim().is_empty() {
            return Err(DevlogError::MalformedPreviousRow(
                "missing date or time".to_string(),
            ));
        }

        let combined = format!("{} {}", self.date.trim(), self.time.trim());
        NaiveDateTime::parse_from_str(&combined, TIMESTAMP_PARSE_FORMAT).map_err(|e| {
            DevlogError::MalformedPreviousRow(format!("cannot parse '{}': {}", combined, e))
        })
    }

    /// スプレッドシートのセル値に変換
    ///
    /// 分数は数値として、不明な場合は空文字列として書き込む
    pub fn to_cells(&self) -> Vec<Value> {
        let minutes = match self.minutes_spent {
            Some(minutes) => Value::from(minutes),
            None => Value::String(String::new()),
        };

        vec![
            Value::String(self.date.clone()),
            Value::String(self.time.clone()),
            Value::String(self.client.clone()),
            Value::String(self.sub_client.clone()),
            Value::String(self.host_machine.clone()),
            Value::String(self.project.clone()),
            Value::String(self.ticket.clone()),
            minutes,
            Value::String(self.log_entry.clone()),
        ]
    }

    /// スプレッドシートのセル値から復元
    ///
    /// 末尾の空セルはAPIが省略するため、足りない列は空として扱う
    pub fn from_cells(cells: &[Value]) -> Self {
        let cell = |index: usize| cells.get(index).map(cell_to_string).unwrap_or_default();

        Self {
            date: cell(0),
            time: cell(1),
            client: cell(2),
            sub_client: cell(3),
            host_machine: cell(4),
            project: cell(5),
            ticket: cell(6),
            minutes_spent: cell(7).trim().parse().ok(),
            log_entry: cell(8),
        }
    }

    /// ヘッダー行と同じ内容かどうか
    pub fn is_header(cells: &[Value]) -> bool {
        cells.len() >= Self::HEADER.len()
            && Self::HEADER
                .iter()
                .zip(cells)
                .all(|(title, cell)| cell_to_string(cell) == *title)
    }
}

fn cell_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
