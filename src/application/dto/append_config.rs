//! # Append Configuration DTO
//!
//! ログ追記の設定のData Transfer Object

use crate::domain::entities::sheet_tab::SheetTab;

/// 追記設定
///
/// 1回の呼び出しで書き込む先と、実際に書き込むかどうか
#[derive(Debug, Clone)]
pub struct AppendConfig {
    /// スプレッドシートID
    pub spreadsheet_id: String,
    /// タブ名（既定: "RawLog"）
    pub tab_name: String,
    /// trueの場合はタブ作成も追記も行わない
    pub dry_run: bool,
}

impl AppendConfig {
    /// 新しい追記設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use devlog::application::dto::append_config::AppendConfig;
    ///
    /// let config = AppendConfig::new("1AbCdEf".to_string(), "RawLog".to_string(), false);
    ///
    /// assert_eq!(config.tab().data_range(), "RawLog!A1:I");
    /// assert!(!config.dry_run);
    /// ```
    pub fn new(spreadsheet_id: String, tab_name: String, dry_run: bool) -> Self {
        Self {
            spreadsheet_id,
            tab_name,
            dry_run,
        }
    }

    /// 書き込み先のタブ
    pub fn tab(&self) -> SheetTab {
        SheetTab::new(self.spreadsheet_id.clone(), self.tab_name.clone())
    }
}
