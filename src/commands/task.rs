use anyhow::Result;
use clap::{Args, Subcommand};

use crate::api::tasks::{NewTask, TaskUpdate};
use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    #[command(about = "Create a task")]
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Due date, YYYY-MM-DD
        #[arg(long)]
        due: Option<String>,
    },
    #[command(about = "List tasks")]
    List,
    #[command(about = "Mark a task completed")]
    Done { id: String },
    #[command(about = "Mark a task not completed")]
    Undone { id: String },
    #[command(about = "Update a task")]
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    #[command(about = "Delete a task")]
    Delete { id: String },
}

pub async fn cmd(args: TaskArgs) -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);
    if !client.is_authenticated() {
        msg_bail_anyhow!(Message::AuthRequired);
    }

    match args.command {
        TaskCommand::Add { title, description, due } => {
            let task = client
                .create_task(&NewTask {
                    title,
                    description,
                    due_date: due,
                })
                .await?;
            msg_success!(Message::TaskCreated(task.title));
        }
        TaskCommand::List => {
            let tasks = client.list_tasks().await?;
            if tasks.is_empty() {
                msg_print!(Message::TasksEmpty);
            } else {
                View::tasks(&tasks);
            }
        }
        TaskCommand::Done { id } => {
            let task = client
                .update_task(
                    &id,
                    &TaskUpdate {
                        completed: Some(true),
                        ..Default::default()
                    },
                )
                .await?;
            msg_success!(Message::TaskUpdated(task.title));
        }
        TaskCommand::Undone { id } => {
            let task = client
                .update_task(
                    &id,
                    &TaskUpdate {
                        completed: Some(false),
                        ..Default::default()
                    },
                )
                .await?;
            msg_success!(Message::TaskUpdated(task.title));
        }
        TaskCommand::Update { id, title, description, due } => {
            let task = client
                .update_task(
                    &id,
                    &TaskUpdate {
                        title,
                        description,
                        due_date: due,
                        completed: None,
                    },
                )
                .await?;
            msg_success!(Message::TaskUpdated(task.title));
        }
        TaskCommand::Delete { id } => {
            client.delete_task(&id).await?;
            msg_success!(Message::TaskDeleted(id));
        }
    }

    Ok(())
}
