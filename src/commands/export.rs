use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::api::money::TransactionKind;
use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv")]
    format: ExportFormat,
    /// Output path; a timestamped name is generated when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
    #[command(subcommand)]
    data: ExportData,
}

#[derive(Debug, Subcommand)]
enum ExportData {
    #[command(about = "Export money transactions")]
    Transactions {
        #[arg(long, value_enum)]
        kind: Option<TransactionKind>,
        #[arg(long, default_value_t = 500)]
        limit: u32,
    },
    #[command(about = "Export the pomodoro statistics snapshot")]
    Stats,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);
    if !client.is_authenticated() {
        msg_bail_anyhow!(Message::AuthRequired);
    }

    let exporter = Exporter::new(args.format, args.output);

    match args.data {
        ExportData::Transactions { kind, limit } => {
            let transactions = client.list_transactions(kind, limit).await?;
            exporter.export_transactions(&transactions)?;
        }
        ExportData::Stats => {
            let stats = client.fetch_stats().await?;
            exporter.export_stats(&stats)?;
        }
    }

    Ok(())
}
