//! # SheetTab Value Object
//!
//! 書き込み先のスプレッドシートとタブ

/// 既定のタブ名
pub const DEFAULT_TAB_NAME: &str = "RawLog";

/// 最終列（"Log Entry"）
const LAST_COLUMN: &str = "I";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetTab {
    pub spreadsheet_id: String,
    pub tab_name: String,
}

impl SheetTab {
    pub fn new(spreadsheet_id: impl Into<String>, tab_name: impl Into<String>) -> Self {
        Self {
            spreadsheet_id: spreadsheet_id.into(),
            tab_name: tab_name.into(),
        }
    }

    /// 追記の起点となる範囲（例: `RawLog!A1`）
    pub fn anchor_range(&self) -> String {
        format!("{}!A1", self.quoted_name())
    }

    /// 全データ範囲（例: `RawLog!A1:I`）
    pub fn data_range(&self) -> String {
        format!("{}!A1:{}", self.quoted_name(), LAST_COLUMN)
    }

    /// A1表記用のタブ名。英数字とアンダースコア以外を含む場合は引用符で囲む
    fn quoted_name(&self) -> String {
        if self
            .tab_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.tab_name.clone()
        } else {
            format!("'{}'", self.tab_name.replace('\'', "''"))
        }
    }
}
