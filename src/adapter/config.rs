//! Configuration
//!
//! JSON設定ファイルの読み込み

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::domain::entities::sheet_tab::DEFAULT_TAB_NAME;

/// 既定のタイムゾーン
pub const DEFAULT_TIME_ZONE: &str = "Australia/Sydney";

/// 設定
///
/// 全ての項目に既定値があるため、設定ファイルは省略できる
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// 書き込み先のタブ名
    pub tab_name: String,
    /// 日付・時刻を記録するIANAタイムゾーン
    pub time_zone: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_name: DEFAULT_TAB_NAME.to_string(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded_path = shellexpand::tilde(path);
        let content = fs::read_to_string(expanded_path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// 設定ファイルが指定されていれば読み込み、無ければ既定値を返す
    pub fn load_or_default(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
