//! Configuration management for the prodo application.
//!
//! Settings live in a JSON file inside the platform data directory. Each
//! module section is optional so users only configure what they use:
//!
//! - **Server**: backend API base URL (tasks, notes, habits, money, stats)
//! - **Timer**: Pomodoro durations and long-break cadence
//! - **Converter**: external Word-to-PDF conversion service
//!
//! Sensitive data never lands here; the bearer token has its own encrypted
//! storage (`libs::secret`). Missing config files yield defaults rather
//! than errors so the app works out of the box against localhost.

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default backend used when no server module is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Backend server connection parameters.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Base URL of the prodo backend API, without a trailing slash.
    pub api_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Pomodoro timer defaults, in seconds.
///
/// These are presentation-layer inputs: values are validated here (the
/// wizard refuses zero durations) because the session engine itself does
/// not re-check them.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimerConfig {
    /// Work session length in seconds.
    pub work_duration: u64,
    /// Short break length in seconds.
    pub short_break_duration: u64,
    /// Long break length in seconds.
    pub long_break_duration: u64,
    /// Number of completed work sessions before a long break.
    pub long_break_interval: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        // 25/5/15 minutes, long break every fourth session
        Self {
            work_duration: 1500,
            short_break_duration: 300,
            long_break_duration: 900,
            long_break_interval: 4,
        }
    }
}

/// External document conversion service.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ConverterConfig {
    /// Base URL of the conversion service; requests go to `{url}/convert`.
    pub api_url: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Root configuration object. Unset sections serialize away entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timer: Option<TimerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub converter: Option<ConverterConfig>,
}

impl Config {
    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolved backend URL regardless of whether a server module is set.
    pub fn api_url(&self) -> String {
        self.server.as_ref().map(|s| s.api_url.clone()).unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Interactive configuration wizard. Existing values are offered as
    /// defaults so re-running only changes what the user touches.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = ["Server", "Timer", "Converter"];
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &index in &selected {
            match modules[index] {
                "Server" => {
                    let default = config.server.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleServer);
                    config.server = Some(ServerConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptServerApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                "Timer" => {
                    let default = config.timer.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleTimer);
                    config.timer = Some(TimerConfig {
                        work_duration: prompt_duration(Message::PromptWorkDuration, default.work_duration)?,
                        short_break_duration: prompt_duration(Message::PromptShortBreakDuration, default.short_break_duration)?,
                        long_break_duration: prompt_duration(Message::PromptLongBreakDuration, default.long_break_duration)?,
                        long_break_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptLongBreakInterval.to_string())
                            .default(default.long_break_interval)
                            .validate_with(|v: &u32| if *v >= 1 { Ok(()) } else { Err("must be at least 1") })
                            .interact_text()?,
                    });
                }
                "Converter" => {
                    let default = config.converter.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleConverter);
                    config.converter = Some(ConverterConfig {
                        api_url: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConverterApiUrl.to_string())
                            .default(default.api_url)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}

/// Prompts for a duration in seconds, rejecting zero. The session engine
/// trusts its inputs, so positivity is enforced at this boundary.
fn prompt_duration(prompt: Message, default: u64) -> Result<u64> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default)
        .validate_with(|v: &u64| if *v > 0 { Ok(()) } else { Err("must be greater than zero") })
        .interact_text()?)
}
