use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::api::notes::{Note, NotePayload};
use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::convert;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_print, msg_success};

#[derive(Debug, Args)]
pub struct NoteArgs {
    #[command(subcommand)]
    command: NoteCommand,
}

#[derive(Debug, Subcommand)]
enum NoteCommand {
    #[command(about = "Create a note")]
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
    },
    #[command(about = "List notes")]
    List,
    #[command(about = "Update a note")]
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    #[command(about = "Delete a note")]
    Delete { id: String },
    #[command(about = "Export a note as PDF")]
    ExportPdf {
        id: String,
        /// Output path; defaults to the note title with spaces underscored
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub async fn cmd(args: NoteArgs) -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);
    if !client.is_authenticated() {
        msg_bail_anyhow!(Message::AuthRequired);
    }

    match args.command {
        NoteCommand::Add { title, description } => {
            let note = client.create_note(&NotePayload { title, description }).await?;
            msg_success!(Message::NoteCreated(note.title));
        }
        NoteCommand::List => {
            let notes = client.list_notes().await?;
            if notes.is_empty() {
                msg_print!(Message::NotesEmpty);
            } else {
                View::notes(&notes);
            }
        }
        NoteCommand::Update { id, title, description } => {
            // The update endpoint replaces the whole note, so merge the
            // changed fields into the current server state first.
            let current = find_note(&client, &id).await?;
            let payload = NotePayload {
                title: title.unwrap_or(current.title),
                description: description.unwrap_or(current.description),
            };
            let note = client.update_note(&id, &payload).await?;
            msg_success!(Message::NoteUpdated(note.title));
        }
        NoteCommand::Delete { id } => {
            client.delete_note(&id).await?;
            msg_success!(Message::NoteDeleted(id));
        }
        NoteCommand::ExportPdf { id, output } => {
            let note = find_note(&client, &id).await?;
            let path = output.unwrap_or_else(|| PathBuf::from(format!("{}.pdf", note.title.replace(' ', "_"))));
            let text = format!("{}\n\n{}", note.title, note.description);
            convert::text_to_pdf(&note.title, &text, &path)?;
            msg_success!(Message::NoteExported(path.display().to_string()));
        }
    }

    Ok(())
}

async fn find_note(client: &ApiClient, id: &str) -> Result<Note> {
    let notes = client.list_notes().await?;
    notes.into_iter().find(|n| n.id == id).ok_or_else(|| anyhow!("note {} not found", id))
}
