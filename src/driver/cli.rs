//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::domain::entities::session_input::SessionInput;

/// 作業ログをGoogle Sheetsに追記するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "devlog")]
#[command(about = "Append a time-tracking entry to a Google Sheets log", long_about = None)]
pub struct Args {
    /// Service account key file (JSON)
    pub credentials_path: String,

    /// Spreadsheet ID
    pub sheet_id: String,

    /// Client (empty to inherit with "c" or "stop")
    pub client: String,

    /// Sub client
    pub sub_client: String,

    /// Host machine
    pub host_machine: String,

    /// Project
    pub project: String,

    /// Ticket
    pub ticket: String,

    /// Minutes spent: a number, "" or "?" to compute, "c" to continue the previous entry
    #[arg(default_value = "")]
    pub minutes_spent: String,

    /// Log entry; "stop" closes the open session, "; " separates lines
    #[arg(default_value = "")]
    pub log_entry: String,

    /// Resolve and print the row without writing to the spreadsheet
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long)]
    pub config: Option<String>,
}

impl Args {
    /// 位置引数からセッション入力を作成
    pub fn session_input(&self) -> SessionInput {
        SessionInput::from_args(
            &self.client,
            &self.sub_client,
            &self.host_machine,
            &self.project,
            &self.ticket,
            &self.minutes_spent,
            &self.log_entry,
        )
    }
}
