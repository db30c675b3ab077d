//! Note CRUD against the backend.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

const NOTES_URL: &str = "/api/notes";

#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct NotePayload {
    pub title: String,
    pub description: String,
}

impl ApiClient {
    pub async fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        self.get(NOTES_URL).await
    }

    pub async fn create_note(&self, note: &NotePayload) -> Result<Note, ApiError> {
        self.post(NOTES_URL, note).await
    }

    pub async fn update_note(&self, id: &str, note: &NotePayload) -> Result<Note, ApiError> {
        self.put(&format!("{}/{}", NOTES_URL, id), note).await
    }

    pub async fn delete_note(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("{}/{}", NOTES_URL, id)).await
    }
}
