//! External document conversion service (Word to PDF).
//!
//! The service takes a multipart upload with a single `file` field and
//! answers with the PDF bytes. It is a separate deployment from the
//! backend and needs no authentication.

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use super::ApiError;
use crate::libs::config::ConverterConfig;

const CONVERT_PATH: &str = "/convert";

pub struct ConverterClient {
    client: Client,
    api_url: String,
}

impl ConverterClient {
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Uploads a `.docx` payload and returns the converted PDF bytes.
    pub async fn docx_to_pdf(&self, file_name: &str, bytes: Vec<u8>) -> Result<Vec<u8>, ApiError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/vnd.openxmlformats-officedocument.wordprocessingml.document")?;
        let form = Form::new().part("file", part);

        let res = self.client.post(format!("{}{}", self.api_url, CONVERT_PATH)).multipart(form).send().await?;

        if !res.status().is_success() {
            return Err(ApiError::Server(format!("conversion service returned {}", res.status())));
        }

        Ok(res.bytes().await?.to_vec())
    }
}
