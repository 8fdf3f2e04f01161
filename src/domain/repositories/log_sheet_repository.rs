//! # Log Sheet Repository Trait
//!
//! 作業ログを保存するスプレッドシートへのアクセスを抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::log_row::LogRow;
use crate::domain::entities::sheet_tab::SheetTab;

/// ログシートリポジトリ
///
/// テーブルは追記のみ。既存の行を変更・削除する操作は持たない。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait LogSheetRepository: Send + Sync {
    /// タブが存在するかどうか
    async fn tab_exists(&self, tab: &SheetTab) -> Result<bool>;

    /// タブが無ければ作成してヘッダー行を書き込む
    ///
    /// 冪等。既に存在するタブにはヘッダーを書き込まない。
    ///
    /// # Returns
    ///
    /// タブを新規作成した場合に `true`
    async fn ensure_tab_exists(&self, tab: &SheetTab, header: &[String]) -> Result<bool>;

    /// 最後のデータ行を取得する
    ///
    /// # Returns
    ///
    /// タブが空、またはヘッダー行しか無い場合は `None`
    async fn last_row(&self, tab: &SheetTab) -> Result<Option<LogRow>>;

    /// テーブルの末尾に1行追記する
    async fn append_row(&self, tab: &SheetTab, row: &LogRow) -> Result<()>;
}
