//! Data export for external analysis and backup.
//!
//! Fetched money transactions and the pomodoro statistics snapshot can be
//! written as CSV, pretty JSON, or a formatted Excel workbook. Output file
//! names default to a timestamped `prodo_export_*` pattern so repeated
//! exports never clobber each other.

use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use crate::api::money::{Transaction, TransactionKind};
use crate::api::pomodoro::StatsSnapshot;
use crate::libs::messages::Message;
use crate::msg_success;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and scripts.
    Csv,
    /// Pretty-printed JSON preserving types and structure.
    Json,
    /// Excel workbook with formatted headers.
    Excel,
}

/// Flattened transaction row used by every output format.
#[derive(Debug, Serialize)]
struct TransactionRow {
    id: String,
    date: String,
    kind: String,
    category: String,
    description: String,
    amount: f64,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        Self {
            id: t.id.clone(),
            date: t.date.clone(),
            kind: match t.kind {
                TransactionKind::Income => "income".to_string(),
                TransactionKind::Expense => "expense".to_string(),
            },
            category: t.category.clone(),
            description: t.description.clone(),
            amount: t.amount,
        }
    }
}

#[derive(Debug, Serialize)]
struct StatsRow {
    today: u32,
    total_pomodoros: u32,
    total_work_minutes: u32,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter; without an explicit path a timestamped default
    /// name with the format-appropriate extension is generated.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("prodo_export_{}", Local::now().format("%Y%m%d_%H%M%S"));

        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn export_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let rows: Vec<TransactionRow> = transactions.iter().map(TransactionRow::from).collect();

        match self.format {
            ExportFormat::Csv => self.transactions_csv(&rows)?,
            ExportFormat::Json => self.write_json(&rows)?,
            ExportFormat::Excel => self.transactions_excel(&rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    pub fn export_stats(&self, stats: &StatsSnapshot) -> Result<()> {
        let row = StatsRow {
            today: stats.today,
            total_pomodoros: stats.total_pomodoros,
            total_work_minutes: stats.total_work_time,
        };

        match self.format {
            ExportFormat::Csv => self.stats_csv(&row)?,
            ExportFormat::Json => self.write_json(&row)?,
            ExportFormat::Excel => self.stats_excel(&row)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn transactions_csv(&self, rows: &[TransactionRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Date", "Type", "Category", "Description", "Amount"])?;
        for row in rows {
            wtr.write_record(&[
                row.id.clone(),
                row.date.clone(),
                row.kind.clone(),
                row.category.clone(),
                row.description.clone(),
                format!("{:.2}", row.amount),
            ])?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn stats_csv(&self, row: &StatsRow) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Today", "Total Sessions", "Total Work Minutes"])?;
        wtr.write_record(&[row.today.to_string(), row.total_pomodoros.to_string(), row.total_work_minutes.to_string()])?;
        wtr.flush()?;
        Ok(())
    }

    fn transactions_excel(&self, rows: &[TransactionRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (col, title) in ["ID", "Date", "Type", "Category", "Description", "Amount"].iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, &row.id)?;
            worksheet.write_string(r, 1, &row.date)?;
            worksheet.write_string(r, 2, &row.kind)?;
            worksheet.write_string(r, 3, &row.category)?;
            worksheet.write_string(r, 4, &row.description)?;
            worksheet.write_number(r, 5, row.amount)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn stats_excel(&self, row: &StatsRow) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Today", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Total Sessions", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Total Work Minutes", &header_format)?;
        worksheet.write_number(1, 0, row.today as f64)?;
        worksheet.write_number(1, 1, row.total_pomodoros as f64)?;
        worksheet.write_number(1, 2, row.total_work_minutes as f64)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
