//! Devlog - Time-tracking log appender
//!
//! 作業ログを Google Sheets に追記

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use devlog::adapter::config::Config;
use devlog::driver::{Args, DevlogWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(args.config.as_deref())?;

    // Create workflow with injected configuration
    let workflow = DevlogWorkflow::new(config);

    workflow.execute(args).await
}
