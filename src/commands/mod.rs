pub mod calories;
pub mod convert;
pub mod export;
pub mod habit;
pub mod health;
pub mod init;
pub mod login;
pub mod logout;
pub mod money;
pub mod note;
pub mod pomodoro;
pub mod task;
pub mod whoami;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::libs;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Sign in (or up with --signup) to the prodo backend")]
    Login(login::LoginArgs),
    #[command(about = "Sign out and remove the stored token")]
    Logout,
    #[command(about = "Show the signed-in account")]
    Whoami,
    #[command(about = "Run Pomodoro focus sessions")]
    Pomodoro(pomodoro::PomodoroArgs),
    #[command(about = "Manage tasks")]
    Task(task::TaskArgs),
    #[command(about = "Manage notes")]
    Note(note::NoteArgs),
    #[command(about = "Manage habits and AI suggestions")]
    Habit(habit::HabitArgs),
    #[command(about = "Track money: transactions, budgets, goals, reports")]
    Money(money::MoneyArgs),
    #[command(about = "Health calculators")]
    Health(health::HealthArgs),
    #[command(about = "Local calorie log")]
    Calories(calories::CaloriesArgs),
    #[command(about = "File converters")]
    Convert(convert::ConvertArgs),
    #[command(about = "Export data to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        libs::init_tracing()?;
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Login(args) => login::cmd(args).await,
            Commands::Logout => logout::cmd(),
            Commands::Whoami => whoami::cmd().await,
            Commands::Pomodoro(args) => pomodoro::cmd(args).await,
            Commands::Task(args) => task::cmd(args).await,
            Commands::Note(args) => note::cmd(args).await,
            Commands::Habit(args) => habit::cmd(args).await,
            Commands::Money(args) => money::cmd(args).await,
            Commands::Health(args) => health::cmd(args),
            Commands::Calories(args) => calories::cmd(args),
            Commands::Convert(args) => convert::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
        }
    }
}
