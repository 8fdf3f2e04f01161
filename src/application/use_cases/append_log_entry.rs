//! # Append Log Entry Use Case
//!
//! 作業ログ追記ユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::application::dto::append_config::AppendConfig;
use crate::domain::entities::log_row::LogRow;
use crate::domain::entities::session_input::SessionInput;
use crate::domain::repositories::clock::Clock;
use crate::domain::repositories::log_sheet_repository::LogSheetRepository;
use crate::domain::services::session_row_resolver::{Resolution, SessionRowResolver};

/// 追記結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// 行を追記した
    Appended {
        row: LogRow,
        elapsed_minutes: Option<i64>,
    },
    /// ドライラン: 追記されるはずの行
    Previewed {
        row: LogRow,
        elapsed_minutes: Option<i64>,
    },
    /// ログエントリが空なので何もしなかった
    Skipped,
}

/// 作業ログ追記ユースケース
///
/// タブの準備、最後の行の読み込み、行の解決、追記を1回ずつ行う。
/// 同時に実行された呼び出し同士の調停は行わない（同じ最後の行を読んで両方が追記しうる）。
pub struct AppendLogEntryUseCase<R: LogSheetRepository, C: Clock> {
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R: LogSheetRepository, C: Clock> AppendLogEntryUseCase<R, C> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `repository` - ログシートリポジトリ
    /// * `clock` - 現在時刻の取得元
    pub fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// 1件の作業ログを追記する
    ///
    /// # Errors
    ///
    /// スプレッドシートへのアクセスに失敗した場合にエラーを返す
    pub async fn execute(&self, config: &AppendConfig, input: &SessionInput) -> Result<AppendOutcome> {
        let now = self.clock.now();
        let tab = config.tab();
        let header = LogRow::header();

        let previous = if config.dry_run {
            if self.repository.tab_exists(&tab).await? {
                self.repository.last_row(&tab).await?
            } else {
                info!("Tab '{}' does not exist yet (dry run)", tab.tab_name);
                None
            }
        } else {
            if self
                .repository
                .ensure_tab_exists(&tab, &header)
                .await
                .context("Failed to prepare the log tab")?
            {
                info!("Created tab '{}' with header row", tab.tab_name);
            }
            self.repository
                .last_row(&tab)
                .await
                .context("Failed to read the last log row")?
        };

        match &previous {
            Some(row) => info!("Last row: {} {} '{}'", row.date, row.time, row.log_entry),
            None => info!("No previous rows in '{}'", tab.tab_name),
        }

        match SessionRowResolver::resolve(previous.as_ref(), input, &now) {
            Resolution::Skip => Ok(AppendOutcome::Skipped),
            Resolution::Append {
                row,
                elapsed_minutes,
            } if config.dry_run => Ok(AppendOutcome::Previewed {
                row,
                elapsed_minutes,
            }),
            Resolution::Append {
                row,
                elapsed_minutes,
            } => {
                self.repository
                    .append_row(&tab, &row)
                    .await
                    .context("Failed to append the log row")?;
                info!("Appended row to '{}'", tab.tab_name);

                Ok(AppendOutcome::Appended {
                    row,
                    elapsed_minutes,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::log_sheet_repository::MockLogSheetRepository;
    use chrono::{DateTime, TimeZone};
    use chrono_tz::Australia::Sydney;
    use chrono_tz::Tz;

    struct FixedClock(DateTime<Tz>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Tz> {
            self.0
        }
    }

    fn clock_at(hour: u32, minute: u32) -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Sydney.with_ymd_and_hms(2024, 1, 1, hour, minute, 0).unwrap(),
        ))
    }

    fn config(dry_run: bool) -> AppendConfig {
        AppendConfig::new("sheet-123".to_string(), "RawLog".to_string(), dry_run)
    }

    fn open_session_row() -> LogRow {
        LogRow {
            date: "Mon, Jan 1, 2024".to_string(),
            time: "09:00".to_string(),
            client: "Acme".to_string(),
            sub_client: "X".to_string(),
            host_machine: "laptop".to_string(),
            project: "website".to_string(),
            ticket: "T-1".to_string(),
            minutes_spent: None,
            log_entry: "work".to_string(),
        }
    }

    fn stop_input() -> SessionInput {
        SessionInput {
            log_entry: "stop".to_string(),
            ..SessionInput::default()
        }
    }

    #[tokio::test]
    async fn test_append_closes_session() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_ensure_tab_exists()
            .withf(|tab, header| tab.tab_name == "RawLog" && header.len() == 9)
            .times(1)
            .returning(|_, _| Ok(false));
        repo.expect_last_row()
            .times(1)
            .returning(|_| Ok(Some(open_session_row())));
        repo.expect_append_row()
            .withf(|tab, row| {
                tab.spreadsheet_id == "sheet-123"
                    && row.client == "Acme"
                    && row.minutes_spent == Some(30)
                    && row.log_entry == "stop"
            })
            .times(1)
            .returning(|_, _| Ok(()));
        repo.expect_tab_exists().never();

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 30));

        let outcome = use_case.execute(&config(false), &stop_input()).await.unwrap();

        match outcome {
            AppendOutcome::Appended {
                row,
                elapsed_minutes,
            } => {
                assert_eq!(elapsed_minutes, Some(30));
                assert_eq!(row.time, "09:30");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_first_row_after_tab_creation() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_ensure_tab_exists()
            .times(1)
            .returning(|_, _| Ok(true));
        repo.expect_last_row().times(1).returning(|_| Ok(None));
        repo.expect_append_row()
            .withf(|_, row| row.client == "Acme" && row.minutes_spent == Some(15))
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 0));
        let input = SessionInput::from_args("Acme", "X", "laptop", "website", "T-1", "15", "start");

        let outcome = use_case.execute(&config(false), &input).await.unwrap();

        assert!(matches!(
            outcome,
            AppendOutcome::Appended {
                elapsed_minutes: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_log_entry_skips_append() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_ensure_tab_exists().returning(|_, _| Ok(false));
        repo.expect_last_row()
            .returning(|_| Ok(Some(open_session_row())));
        repo.expect_append_row().never();

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 30));

        let outcome = use_case
            .execute(&config(false), &SessionInput::default())
            .await
            .unwrap();

        assert_eq!(outcome, AppendOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_dry_run_never_writes() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_tab_exists().times(1).returning(|_| Ok(true));
        repo.expect_last_row()
            .times(1)
            .returning(|_| Ok(Some(open_session_row())));
        repo.expect_ensure_tab_exists().never();
        repo.expect_append_row().never();

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 45));
        let input = SessionInput::from_args("", "", "", "", "", "c", "more work");

        let outcome = use_case.execute(&config(true), &input).await.unwrap();

        match outcome {
            AppendOutcome::Previewed {
                row,
                elapsed_minutes,
            } => {
                assert_eq!(elapsed_minutes, Some(45));
                assert_eq!(row.client, "Acme");
                assert_eq!(row.minutes_spent, Some(45));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_dry_run_without_tab_treats_as_first_row() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_tab_exists().times(1).returning(|_| Ok(false));
        repo.expect_last_row().never();
        repo.expect_append_row().never();

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 45));
        let input = SessionInput::from_args("Acme", "", "", "", "", "", "start");

        let outcome = use_case.execute(&config(true), &input).await.unwrap();

        assert!(matches!(
            outcome,
            AppendOutcome::Previewed {
                elapsed_minutes: None,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_adapter_error_propagates() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_ensure_tab_exists()
            .returning(|_, _| Err(anyhow::anyhow!("quota exceeded")));
        repo.expect_append_row().never();

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 45));

        let err = use_case
            .execute(&config(false), &stop_input())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Failed to prepare the log tab"));
        assert!(format!("{:#}", err).contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_append_error_propagates() {
        let mut repo = MockLogSheetRepository::new();
        repo.expect_ensure_tab_exists().returning(|_, _| Ok(false));
        repo.expect_last_row()
            .returning(|_| Ok(Some(open_session_row())));
        repo.expect_append_row()
            .returning(|_, _| Err(anyhow::anyhow!("network down")));

        let use_case = AppendLogEntryUseCase::new(Arc::new(repo), clock_at(9, 45));

        let result = use_case.execute(&config(false), &stop_input()).await;

        assert!(result.is_err());
    }
}
