//! # SessionInput Entity
//!
//! 1回の呼び出しで渡される作業セッションの記述

/// "minutes spent" 引数の解釈
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MinutesSpec {
    /// 明示された分数
    Numeric(u32),
    /// 空文字列または "?": 直前の行からの経過時間を計算する
    #[default]
    Unspecified,
    /// "c": コンテキストを引き継ぎ、経過時間を計算する
    ContinuePrevious,
    /// 数値として解釈できない値（空として保存される）
    Unparseable(String),
}

impl MinutesSpec {
    /// 引数文字列を解釈する
    ///
    /// ```
    /// use devlog::domain::entities::session_input::MinutesSpec;
    ///
    /// assert_eq!(MinutesSpec::parse(""), MinutesSpec::Unspecified);
    /// assert_eq!(MinutesSpec::parse("?"), MinutesSpec::Unspecified);
    /// assert_eq!(MinutesSpec::parse("c"), MinutesSpec::ContinuePrevious);
    /// assert_eq!(MinutesSpec::parse("30"), MinutesSpec::Numeric(30));
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "?" => Self::Unspecified,
            "c" => Self::ContinuePrevious,
            other => match other.parse::<u32>() {
                Ok(minutes) => Self::Numeric(minutes),
                Err(_) => Self::Unparseable(raw.to_string()),
            },
        }
    }
}

/// 作業セッションの入力
///
/// コンテキスト項目が `None` の場合は「直前の行から引き継ぐ」を意味する。
/// 引き継ぎを行わない分岐では空として保存される。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionInput {
    pub client: Option<String>,
    pub sub_client: Option<String>,
    pub host_machine: Option<String>,
    pub project: Option<String>,
    pub ticket: Option<String>,
    pub minutes_spent: MinutesSpec,
    pub log_entry: String,
}

impl SessionInput {
    /// CLIの生の文字列から入力を作成
    ///
    /// 空のコンテキスト文字列は `None` として扱う
    #[allow(clippy::too_many_arguments)]
    pub fn from_args(
        client: &str,
        sub_client: &str,
        host_machine: &str,
        project: &str,
        ticket: &str,
        minutes_spent: &str,
        log_entry: &str,
    ) -> Self {
        Self {
            client: non_empty(client),
            sub_client: non_empty(sub_client),
            host_machine: non_empty(host_machine),
            project: non_empty(project),
            ticket: non_empty(ticket),
            minutes_spent: MinutesSpec::parse(minutes_spent),
            log_entry: log_entry.to_string(),
        }
    }

    /// ログエントリが空（空白のみを含む）かどうか
    pub fn is_blank(&self) -> bool {
        self.log_entry.trim().is_empty()
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
