//! Google Sheets Log Repository Implementation
//!
//! LogSheetRepositoryのGoogle Sheets実装

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

use crate::adapter::sheets::client::SheetsClient;
use crate::domain::entities::log_row::LogRow;
use crate::domain::entities::sheet_tab::SheetTab;
use crate::domain::repositories::log_sheet_repository::LogSheetRepository;

/// Google Sheetsログリポジトリ
pub struct GoogleSheetsLogRepository {
    client: Arc<dyn SheetsClient>,
}

impl GoogleSheetsLogRepository {
    /// 新しいリポジトリを作成
    pub fn new(client: Arc<dyn SheetsClient>) -> Self {
        Self { client }
    }

    /// 読み込んだ範囲から最後のデータ行を取り出す
    ///
    /// 空の範囲、またはヘッダー行しか無い場合は `None`
    fn last_data_row(values: &[Vec<Value>]) -> Option<LogRow> {
        let last = values.last()?;

        if LogRow::is_header(last) {
            None
        } else {
            Some(LogRow::from_cells(last))
        }
    }
}

#[async_trait]
impl LogSheetRepository for GoogleSheetsLogRepository {
    async fn tab_exists(&self, tab: &SheetTab) -> Result<bool> {
        let titles = self.client.sheet_titles(&tab.spreadsheet_id).await?;
        Ok(titles.iter().any(|title| title == &tab.tab_name))
    }

    async fn ensure_tab_exists(&self, tab: &SheetTab, header: &[String]) -> Result<bool> {
        if self.tab_exists(tab).await? {
            debug!("Tab '{}' already exists", tab.tab_name);
            return Ok(false);
        }

        self.client
            .add_sheet(&tab.spreadsheet_id, &tab.tab_name)
            .await?;

        let header_row = header.iter().cloned().map(Value::String).collect();
        self.client
            .append_values(&tab.spreadsheet_id, &tab.anchor_range(), vec![header_row])
            .await?;

        info!("Added tab '{}' to spreadsheet {}", tab.tab_name, tab.spreadsheet_id);
        Ok(true)
    }

    async fn last_row(&self, tab: &SheetTab) -> Result<Option<LogRow>> {
        let values = self
            .client
            .get_values(&tab.spreadsheet_id, &tab.data_range())
            .await?;

        debug!("Read {} rows from {}", values.len(), tab.data_range());

        Ok(Self::last_data_row(&values))
    }

    async fn append_row(&self, tab: &SheetTab, row: &LogRow) -> Result<()> {
        self.client
            .append_values(&tab.spreadsheet_id, &tab.anchor_range(), vec![row.to_cells()])
            .await
    }
}
