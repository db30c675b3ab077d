//! Authentication endpoints: login, signup, current user.

use serde::{Deserialize, Serialize};

use super::{ApiClient, ApiError};

const LOGIN_URL: &str = "/api/auth/login";
const SIGNUP_URL: &str = "/api/auth/signup";
const ME_URL: &str = "/api/auth/me";

#[derive(Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub mobile: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

impl ApiClient {
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post(LOGIN_URL, credentials).await
    }

    pub async fn signup(&self, details: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.post(SIGNUP_URL, details).await
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.get(ME_URL).await
    }
}
