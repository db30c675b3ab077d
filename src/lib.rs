//! # Prodo - Personal Productivity Suite
//!
//! A command-line companion for focused work: Pomodoro sessions with
//! server-synchronized statistics, plus tasks, notes, habits, personal
//! finance, health calculators, and quick file converters.
//!
//! ## Features
//!
//! - **Pomodoro Sessions**: Work/break countdown cycles with long-break
//!   cadence and best-effort completion notifications
//! - **Statistics Sync**: Completed sessions are reported to a remote
//!   statistics store when signed in
//! - **Tasks, Notes, Habits**: CRUD against the Prodo backend, including
//!   AI-assisted habit suggestions
//! - **Money Tracking**: Transactions, budgets, savings goals, and reports
//! - **Health Tools**: BMI, BMR, and body-fat calculators; a local calorie log
//! - **File Converters**: text to PDF/Word, image format conversion, and
//!   Word to PDF through an external conversion service
//! - **Data Export**: Export transactions and statistics to CSV, JSON, and Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use prodo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
