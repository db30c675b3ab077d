use anyhow::Result;
use clap::{Args, Subcommand};

use crate::libs::calorie::{CalorieLog, MealType};
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_print, msg_success};

#[derive(Debug, Args)]
pub struct CaloriesArgs {
    #[command(subcommand)]
    command: CaloriesCommand,
}

#[derive(Debug, Subcommand)]
enum CaloriesCommand {
    #[command(about = "Log a food entry")]
    Add {
        name: String,
        calories: u32,
        #[arg(long, value_enum, default_value = "breakfast")]
        meal: MealType,
    },
    #[command(about = "Show the log with totals against the daily goal")]
    List,
    #[command(about = "Remove an entry by id")]
    Delete { id: u64 },
    #[command(about = "Set the daily calorie goal")]
    Goal { amount: u32 },
}

pub fn cmd(args: CaloriesArgs) -> Result<()> {
    let mut log = CalorieLog::read()?;

    match args.command {
        CaloriesCommand::Add { name, calories, meal } => {
            log.add(&name, calories, meal);
            log.save()?;
            msg_success!(Message::CalorieEntryAdded(name, calories));
        }
        CaloriesCommand::List => {
            if log.entries.is_empty() {
                msg_print!(Message::CalorieLogEmpty);
            } else {
                View::calorie_log(&log);
            }
        }
        CaloriesCommand::Delete { id } => {
            if log.remove(id) {
                log.save()?;
                msg_success!(Message::CalorieEntryDeleted(id));
            } else {
                msg_print!(Message::CalorieEntryNotFound(id));
            }
        }
        CaloriesCommand::Goal { amount } => {
            log.set_goal(amount);
            log.save()?;
            msg_success!(Message::CalorieGoalSet(amount));
        }
    }

    Ok(())
}
