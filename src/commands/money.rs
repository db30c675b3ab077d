use anyhow::Result;
use chrono::Local;
use clap::{Args, Subcommand};

use crate::api::money::{BudgetPayload, NewSavingsGoal, NewTransaction, TransactionKind};
use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct MoneyArgs {
    #[command(subcommand)]
    command: MoneyCommand,
}

#[derive(Debug, Subcommand)]
enum MoneyCommand {
    #[command(about = "Record a transaction")]
    Add {
        #[arg(value_enum)]
        kind: TransactionKind,
        amount: f64,
        category: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Transaction date, YYYY-MM-DD; defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    #[command(about = "List transactions")]
    List {
        #[arg(long, value_enum)]
        kind: Option<TransactionKind>,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    #[command(about = "Delete a transaction")]
    Delete { id: String },
    #[command(about = "Income, expenses, and savings at a glance")]
    Dashboard,
    #[command(about = "Manage category budgets")]
    Budget {
        #[command(subcommand)]
        command: BudgetCommand,
    },
    #[command(about = "Manage savings goals")]
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },
    #[command(about = "Summary report for a date range")]
    Report {
        /// Start date, YYYY-MM-DD
        start: String,
        /// End date, YYYY-MM-DD
        end: String,
    },
}

#[derive(Debug, Subcommand)]
enum BudgetCommand {
    #[command(about = "List budgets")]
    List,
    #[command(about = "Create or replace a category budget")]
    Set { category: String, amount: f64 },
}

#[derive(Debug, Subcommand)]
enum GoalCommand {
    #[command(about = "List savings goals")]
    List,
    #[command(about = "Create a savings goal")]
    Add { name: String, target: f64 },
    #[command(about = "Update saved amount for a goal")]
    Progress { id: String, amount: f64 },
}

pub async fn cmd(args: MoneyArgs) -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);
    if !client.is_authenticated() {
        msg_bail_anyhow!(Message::AuthRequired);
    }

    match args.command {
        MoneyCommand::Add {
            kind,
            amount,
            category,
            description,
            date,
        } => {
            let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
            let transaction = client
                .create_transaction(&NewTransaction {
                    kind,
                    amount,
                    category,
                    description,
                    date,
                })
                .await?;
            let label = if transaction.description.is_empty() {
                transaction.category.clone()
            } else {
                transaction.description.clone()
            };
            msg_success!(Message::TransactionAdded(label));
        }
        MoneyCommand::List { kind, limit } => {
            let transactions = client.list_transactions(kind, limit).await?;
            if transactions.is_empty() {
                msg_print!(Message::TransactionsEmpty);
            } else {
                View::transactions(&transactions);
            }
        }
        MoneyCommand::Delete { id } => {
            client.delete_transaction(&id).await?;
            msg_success!(Message::TransactionDeleted(id));
        }
        MoneyCommand::Dashboard => {
            let dashboard = client.money_dashboard().await?;
            msg_print!(Message::DashboardHeader, true);
            View::money_summary(&dashboard.summary);
            View::category_totals("Expenses by category", &dashboard.expense_categories);
            View::category_totals("Income by category", &dashboard.income_categories);
        }
        MoneyCommand::Budget { command } => match command {
            BudgetCommand::List => {
                let budgets = client.list_budgets().await?;
                if budgets.is_empty() {
                    msg_print!(Message::BudgetsEmpty);
                } else {
                    View::budgets(&budgets);
                }
            }
            BudgetCommand::Set { category, amount } => {
                let budget = client.save_budget(&BudgetPayload { category, amount }).await?;
                msg_success!(Message::BudgetSaved(budget.category));
            }
        },
        MoneyCommand::Goal { command } => match command {
            GoalCommand::List => {
                let goals = client.list_savings_goals().await?;
                if goals.is_empty() {
                    msg_print!(Message::GoalsEmpty);
                } else {
                    View::savings_goals(&goals);
                }
            }
            GoalCommand::Add { name, target } => {
                let goal = client
                    .create_savings_goal(&NewSavingsGoal {
                        name,
                        target_amount: target,
                    })
                    .await?;
                msg_success!(Message::GoalAdded(goal.name));
            }
            GoalCommand::Progress { id, amount } => {
                let goal = client.update_goal_progress(&id, amount).await?;
                msg_success!(Message::GoalProgressUpdated(goal.name));
            }
        },
        MoneyCommand::Report { start, end } => {
            let report = client.money_report(&start, &end).await?;
            msg_print!(Message::ReportHeader(start, end), true);
            View::money_summary(&report.summary);
            if !report.transactions.is_empty() {
                View::transactions(&report.transactions);
            }
        }
    }

    Ok(())
}
