use anyhow::Result;

use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_print;

/// Shows the account the stored token belongs to.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);

    if !client.is_authenticated() {
        msg_print!(Message::NotLoggedIn);
        return Ok(());
    }

    let user = client.current_user().await?;
    println!("{} <{}>", user.name, user.email);
    Ok(())
}
