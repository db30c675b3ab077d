//! REST client for the prodo backend and its sibling services.
//!
//! One [`ApiClient`] carries the base URL and the bearer token; resource
//! modules (tasks, notes, habits, money, pomodoro, auth) layer typed
//! requests on top of it. The token is loaded from encrypted storage at
//! client construction; an absent token simply produces an anonymous
//! client, and callers decide whether that is acceptable for their
//! operation (the pomodoro runner runs stats-free, CRUD commands refuse).
//!
//! Error shape follows the backend contract: non-2xx responses carry a
//! JSON `{"message": ...}` body which becomes [`ApiError::Server`]; 401
//! maps to [`ApiError::Unauthorized`] so commands can point the user at
//! `prodo login`.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::libs::config::Config;
use crate::libs::secret::Secret;

pub mod auth;
pub mod converter;
pub mod habits;
pub mod money;
pub mod notes;
pub mod pomodoro;
pub mod tasks;

/// File name of the encrypted bearer-token store.
const TOKEN_FILE: &str = ".token";

/// Access to the persisted bearer token.
pub fn token_store() -> Secret {
    Secret::new(TOKEN_FILE)
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("authentication required")]
    Unauthorized,
    #[error("{0}")]
    Server(String),
}

/// Error body returned by the backend on failed requests.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Builds a client for the configured backend, picking up the stored
    /// bearer token when one exists.
    pub fn from_config(config: &Config) -> Self {
        let token = token_store().load().ok();
        Self {
            client: Client::new(),
            base_url: config.api_url(),
            token,
        }
    }

    /// A client with no credential, regardless of what is stored.
    pub fn anonymous(config: &Config) -> Self {
        Self {
            client: Client::new(),
            base_url: config.api_url(),
            token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = self.request(Method::GET, path).send().await?;
        Self::parse(res).await
    }

    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<T, ApiError> {
        let res = self.request(Method::GET, path).query(query).send().await?;
        Self::parse(res).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let res = self.request(Method::POST, path).json(body).send().await?;
        Self::parse(res).await
    }

    /// POST without a request body (e.g. habit completion).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let res = self.request(Method::POST, path).send().await?;
        Self::parse(res).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        let res = self.request(Method::PUT, path).json(body).send().await?;
        Self::parse(res).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let res = self.request(Method::DELETE, path).send().await?;
        Self::check(res).await?;
        Ok(())
    }

    async fn parse<T: DeserializeOwned>(res: Response) -> Result<T, ApiError> {
        let res = Self::check(res).await?;
        Ok(res.json::<T>().await?)
    }

    async fn check(res: Response) -> Result<Response, ApiError> {
        match res.status() {
            status if status.is_success() => Ok(res),
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
            _ => {
                let message = res
                    .json::<ErrorBody>()
                    .await
                    .ok()
                    .and_then(|b| b.message)
                    .unwrap_or_else(|| "Request failed".to_string());
                Err(ApiError::Server(message))
            }
        }
    }
}
