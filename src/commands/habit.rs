use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::habits::{HabitFrequency, HabitType, NewHabit};
use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct HabitArgs {
    #[command(subcommand)]
    command: HabitCommand,
}

#[derive(Debug, Subcommand)]
enum HabitCommand {
    #[command(about = "List habits")]
    List,
    #[command(about = "Create a habit")]
    Add {
        name: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(long = "type", value_enum, default_value = "positive")]
        habit_type: HabitType,
        #[arg(long, value_enum, default_value = "daily")]
        frequency: HabitFrequency,
        #[arg(long, default_value = "")]
        goal: String,
    },
    #[command(about = "Record a completion for a habit")]
    Complete { id: String },
    #[command(about = "Delete a habit")]
    Delete { id: String },
    #[command(about = "Get AI habit suggestions for your goals")]
    Suggest {
        /// Free-text goals, e.g. "better sleep, less stress"
        goals: String,
        /// Add the n-th suggestion (1-based) as a new daily habit
        #[arg(long)]
        add: Option<usize>,
    },
    #[command(about = "AI analysis of your current habits")]
    Analysis,
    #[command(about = "A short AI motivation message")]
    Motivation,
}

pub async fn cmd(args: HabitArgs) -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);
    if !client.is_authenticated() {
        msg_bail_anyhow!(Message::AuthRequired);
    }

    match args.command {
        HabitCommand::List => {
            let habits = client.list_habits().await?;
            if habits.is_empty() {
                msg_print!(Message::HabitsEmpty);
            } else {
                View::habits(&habits);
            }
        }
        HabitCommand::Add {
            name,
            description,
            habit_type,
            frequency,
            goal,
        } => {
            let habit = client
                .create_habit(&NewHabit {
                    name,
                    description,
                    habit_type,
                    frequency,
                    goal,
                })
                .await?;
            msg_success!(Message::HabitCreated(habit.name));
        }
        HabitCommand::Complete { id } => {
            let habit = client.complete_habit(&id).await?;
            msg_success!(Message::HabitCompleted(habit.name, habit.streak));
        }
        HabitCommand::Delete { id } => {
            client.delete_habit(&id).await?;
            msg_success!(Message::HabitDeleted(id));
        }
        HabitCommand::Suggest { goals, add } => {
            let recommendations = client.habit_recommendations(&goals).await?;
            if recommendations.is_empty() {
                msg_print!(Message::RecommendationsEmpty);
                return Ok(());
            }

            msg_print!(Message::RecommendationsHeader(goals));
            View::habit_recommendations(&recommendations);

            // Adopted suggestions default to daily frequency with no goal
            if let Some(index) = add {
                if let Some(rec) = recommendations.get(index.saturating_sub(1)) {
                    let habit = client
                        .create_habit(&NewHabit {
                            name: rec.name.clone(),
                            description: rec.description.clone(),
                            habit_type: rec.habit_type,
                            frequency: HabitFrequency::Daily,
                            goal: String::new(),
                        })
                        .await?;
                    msg_success!(Message::HabitCreated(habit.name));
                }
            }
        }
        HabitCommand::Analysis => {
            let analysis = client.habit_analysis().await?;
            msg_print!(analysis.message, true);
        }
        HabitCommand::Motivation => {
            let motivation = client.habit_motivation().await?;
            msg_print!(motivation.message, true);
        }
    }

    Ok(())
}
