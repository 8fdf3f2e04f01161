//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::adapter::clock::SystemClock;
use crate::adapter::config::Config;
use crate::adapter::repositories::google_sheets_log_repository::GoogleSheetsLogRepository;
use crate::adapter::sheets::client::HubSheetsClient;
use crate::application::dto::append_config::AppendConfig;
use crate::application::use_cases::append_log_entry::{AppendLogEntryUseCase, AppendOutcome};
use crate::domain::entities::log_row::LogRow;

use super::cli::Args;

/// 行を人が読める形に整形する
pub fn format_row(row: &LogRow) -> String {
    let minutes = row
        .minutes_spent
        .map(|m| m.to_string())
        .unwrap_or_default();

    LogRow::HEADER
        .iter()
        .zip([
            row.date.as_str(),
            row.time.as_str(),
            row.client.as_str(),
            row.sub_client.as_str(),
            row.host_machine.as_str(),
            row.project.as_str(),
            row.ticket.as_str(),
            minutes.as_str(),
            row.log_entry.as_str(),
        ])
        .map(|(title, value)| format!("  {}: {}", title, value.replace('\n', "\n    ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 追記結果をユーザー向けのメッセージにする
pub fn outcome_message(outcome: &AppendOutcome) -> String {
    let elapsed_line = |elapsed: &Option<i64>| match elapsed {
        Some(minutes) => format!("Minutes since last log entry: {}\n", minutes),
        None => String::new(),
    };

    match outcome {
        AppendOutcome::Appended {
            row,
            elapsed_minutes,
        } => format!(
            "{}✓ Appended row:\n{}",
            elapsed_line(elapsed_minutes),
            format_row(row)
        ),
        AppendOutcome::Previewed {
            row,
            elapsed_minutes,
        } => format!(
            "{}✓ Dry-run mode (not actually appending)\n  Would append:\n{}",
            elapsed_line(elapsed_minutes),
            format_row(row)
        ),
        AppendOutcome::Skipped => "Nothing to log (empty log entry)".to_string(),
    }
}

/// Devlog Workflow
pub struct DevlogWorkflow {
    config: Config,
}

impl DevlogWorkflow {
    /// Create a new workflow instance with injected configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute one append
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting devlog...");
        info!("Dry run: {}", args.dry_run);

        // タイムゾーンが不正なら何も書き込む前に中断する
        let clock = Arc::new(SystemClock::from_time_zone(&self.config.time_zone)?);

        let client = HubSheetsClient::connect(&args.credentials_path).await?;
        let repository = Arc::new(GoogleSheetsLogRepository::new(Arc::new(client)));
        let use_case = AppendLogEntryUseCase::new(repository, clock);

        let append_config = AppendConfig::new(
            args.sheet_id.clone(),
            self.config.tab_name.clone(),
            args.dry_run,
        );

        let outcome = use_case
            .execute(&append_config, &args.session_input())
            .await?;

        println!("{}", outcome_message(&outcome));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_row() -> LogRow {
        LogRow {
            date: "Mon, Jan 1, 2024".to_string(),
            time: "09:45".to_string(),
            client: "Acme".to_string(),
            sub_client: "X".to_string(),
            host_machine: "laptop".to_string(),
            project: "website".to_string(),
            ticket: "T-1".to_string(),
            minutes_spent: Some(45),
            log_entry: "fix bug\nadd test".to_string(),
        }
    }

    #[test]
    fn test_format_row() {
        let text = format_row(&create_test_row());

        assert!(text.contains("  Date: Mon, Jan 1, 2024"));
        assert!(text.contains("  Minutes Spent: 45"));
        assert!(text.contains("  Log Entry: fix bug\n    add test"));
    }

    #[test]
    fn test_format_row_empty_minutes() {
        let mut row = create_test_row();
        row.minutes_spent = None;

        assert!(format_row(&row).contains("  Minutes Spent: \n"));
    }

    #[test]
    fn test_outcome_message_appended() {
        let message = outcome_message(&AppendOutcome::Appended {
            row: create_test_row(),
            elapsed_minutes: Some(45),
        });

        assert!(message.starts_with("Minutes since last log entry: 45\n✓ Appended row:"));
    }

    #[test]
    fn test_outcome_message_first_row_has_no_elapsed_line() {
        let message = outcome_message(&AppendOutcome::Appended {
            row: create_test_row(),
            elapsed_minutes: None,
        });

        assert!(message.starts_with("✓ Appended row:"));
    }

    #[test]
    fn test_outcome_message_previewed() {
        let message = outcome_message(&AppendOutcome::Previewed {
            row: create_test_row(),
            elapsed_minutes: Some(10),
        });

        assert!(message.contains("Dry-run mode"));
        assert!(message.contains("  Client: Acme"));
    }

    #[test]
    fn test_outcome_message_skipped() {
        assert_eq!(
            outcome_message(&AppendOutcome::Skipped),
            "Nothing to log (empty log entry)"
        );
    }
}
