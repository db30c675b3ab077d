use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::api::auth::{LoginRequest, SignupRequest};
use crate::api::{token_store, ApiClient};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Create a new account instead of signing in
    #[arg(long)]
    signup: bool,
}

/// Signs in (or up) against the backend and stores the bearer token
/// encrypted at rest. Credentials are prompted interactively and never
/// written anywhere.
pub async fn cmd(args: LoginArgs) -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::anonymous(&config);

    let theme = ColorfulTheme::default();

    let response = if args.signup {
        let name: String = Input::with_theme(&theme).with_prompt(Message::PromptName.to_string()).interact_text()?;
        let email: String = Input::with_theme(&theme).with_prompt(Message::PromptEmail.to_string()).interact_text()?;
        let mobile: String = Input::with_theme(&theme)
            .with_prompt(Message::PromptMobile.to_string())
            .allow_empty(true)
            .interact_text()?;
        let password = Password::with_theme(&theme).with_prompt(Message::PromptPassword.to_string()).interact()?;

        let response = client.signup(&SignupRequest { name, email, mobile, password }).await?;
        msg_success!(Message::SignupComplete(response.user.name.clone()));
        response
    } else {
        let email: String = Input::with_theme(&theme).with_prompt(Message::PromptEmail.to_string()).interact_text()?;
        let password = Password::with_theme(&theme).with_prompt(Message::PromptPassword.to_string()).interact()?;

        let response = client.login(&LoginRequest { email, password }).await?;
        msg_success!(Message::LoggedIn(response.user.name.clone()));
        response
    };

    token_store().store(&response.token)?;
    Ok(())
}
