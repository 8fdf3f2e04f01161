//! Google Sheets Client Abstractions
//!
//! クライアントの抽象化と実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_sheets4::api::{
    AddSheetRequest, BatchUpdateSpreadsheetRequest, Request, SheetProperties, ValueRange,
};
use google_sheets4::{hyper, hyper_rustls, Sheets};
use serde_json::Value;

#[cfg(test)]
use mockall::automock;

use super::auth::{authenticate, HttpsConnector};

pub type SheetsHub = Sheets<HttpsConnector>;

/// Trait for the Sheets API calls the log repository needs
/// This enables mocking in tests while using the real hub in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SheetsClient: Send + Sync {
    /// Titles of every tab in the spreadsheet
    async fn sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>>;

    /// Add an empty tab
    async fn add_sheet(&self, spreadsheet_id: &str, title: &str) -> Result<()>;

    /// Read a range; trailing empty rows and cells are omitted by the API
    async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<Value>>>;

    /// Append rows after the last row of the table found at `range`
    async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<Value>>,
    ) -> Result<()>;
}

/// HTTPS client with native roots
pub fn http_client() -> hyper::Client<HttpsConnector> {
    hyper::Client::builder().build(
        hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .expect("could not load native root certificates")
            .https_or_http()
            .enable_http1()
            .build(),
    )
}

/// Creates an authenticated Sheets hub from a service account key file
pub async fn create_hub(key_path: &str) -> Result<SheetsHub> {
    let client = http_client();
    let auth = authenticate(key_path, client.clone()).await?;

    Ok(Sheets::new(client, auth))
}

/// Sheets client that owns the hub instance
pub struct HubSheetsClient {
    hub: SheetsHub,
}

impl HubSheetsClient {
    pub fn new(hub: SheetsHub) -> Self {
        Self { hub }
    }

    /// Authenticate with the service account key and wrap the resulting hub
    pub async fn connect(key_path: &str) -> Result<Self> {
        Ok(Self::new(create_hub(key_path).await?))
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl SheetsClient for HubSheetsClient {
    async fn sheet_titles(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let (_, spreadsheet) = self
            .hub
            .spreadsheets()
            .get(spreadsheet_id)
            .doit()
            .await
            .context("Failed to fetch spreadsheet")?;

        Ok(spreadsheet
            .sheets
            .unwrap_or_default()
            .into_iter()
            .filter_map(|sheet| sheet.properties.and_then(|props| props.title))
            .collect())
    }

    async fn add_sheet(&self, spreadsheet_id: &str, title: &str) -> Result<()> {
        let request = BatchUpdateSpreadsheetRequest {
            requests: Some(vec![Request {
                add_sheet: Some(AddSheetRequest {
                    properties: Some(SheetProperties {
                        title: Some(title.to_string()),
                        ..Default::default()
                    }),
                }),
                ..Default::default()
            }]),
            ..Default::default()
        };

        self.hub
            .spreadsheets()
            .batch_update(request, spreadsheet_id)
            .doit()
            .await
            .map(|_| ())
            .with_context(|| format!("Failed to add sheet '{}'", title))
    }

    async fn get_values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<Value>>> {
        let (_, value_range) = self
            .hub
            .spreadsheets()
            .values_get(spreadsheet_id, range)
            .doit()
            .await
            .with_context(|| format!("Failed to read range {}", range))?;

        Ok(value_range.values.unwrap_or_default())
    }

    async fn append_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        rows: Vec<Vec<Value>>,
    ) -> Result<()> {
        let value_range = ValueRange {
            major_dimension: Some("ROWS".to_string()),
            range: None,
            values: Some(rows),
        };

        self.hub
            .spreadsheets()
            .values_append(value_range, spreadsheet_id, range)
            .value_input_option("RAW")
            .doit()
            .await
            .map(|_| ())
            .with_context(|| format!("Failed to append to range {}", range))
    }
}
