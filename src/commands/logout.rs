use anyhow::Result;

use crate::api::token_store;
use crate::libs::messages::Message;
use crate::msg_success;

/// Removes the stored bearer token.
pub fn cmd() -> Result<()> {
    token_store().clear()?;
    msg_success!(Message::LoggedOut);
    Ok(())
}
