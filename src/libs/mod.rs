//! Core library modules for the prodo application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging, secrets
//! - **Pomodoro Engine**: The session state machine and its notifier
//! - **Health Tools**: Calculators and the local calorie log
//! - **User Interface**: Console rendering, formatting, data export
//! - **Converters**: Local document and image conversion

use anyhow::Result;

pub mod calorie;
pub mod config;
pub mod convert;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod health;
pub mod messages;
pub mod notifier;
pub mod pomodoro;
pub mod secret;
pub mod view;

/// Installs the tracing subscriber when debug mode is requested; otherwise
/// messages print directly and tracing stays dormant.
pub fn init_tracing() -> Result<()> {
    if messages::macros::is_debug_mode() {
        use tracing_subscriber::EnvFilter;
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }
    Ok(())
}
