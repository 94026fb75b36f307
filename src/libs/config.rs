//! Configuration management for the doable application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and can be created either by hand or through the interactive
//! `doable init` wizard. Environment variables override file values, which
//! keeps containerized deployments free of config files entirely.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\lacodda\doable\config.json`
//! - **macOS/Linux**: `~/.lacodda/doable/config.json`
//!
//! ## Environment Overrides
//!
//! - `DOABLE_HOST` overrides the listen address
//! - `DOABLE_PORT` overrides the listen port

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// HTTP listener configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ServerConfig {
    /// Address the server binds to.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        }
    }
}

/// Main configuration container for the entire application.
///
/// Every section is optional; a missing section falls back to its defaults
/// so a fresh installation runs without any setup.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// HTTP listener settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ServerConfig>,
}

impl Config {
    /// Reads configuration from the filesystem, applying environment
    /// variable overrides on top.
    ///
    /// A missing config file is not an error; defaults are returned instead.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let mut config = if config_file_path.exists() {
            let config_str = fs::read_to_string(config_file_path)?;
            serde_json::from_str(&config_str)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Existing values are pre-filled as defaults so re-running the wizard
    /// only changes what the user actually edits.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();
        let default = config.server.clone().unwrap_or_default();

        config.server = Some(ServerConfig {
            host: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptHost.to_string())
                .default(default.host)
                .interact_text()?,
            port: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPort.to_string())
                .default(default.port)
                .interact_text()?,
        });

        Ok(config)
    }

    /// Resolved listener settings, falling back to defaults.
    pub fn server(&self) -> ServerConfig {
        self.server.clone().unwrap_or_default()
    }

    fn apply_env_overrides(&mut self) {
        let has_host = env::var("DOABLE_HOST").is_ok();
        let has_port = env::var("DOABLE_PORT").is_ok();
        if !has_host && !has_port {
            return;
        }

        let mut server = self.server.clone().unwrap_or_default();
        if let Ok(host) = env::var("DOABLE_HOST") {
            server.host = host;
        }
        if let Some(port) = env::var("DOABLE_PORT").ok().and_then(|p| p.parse().ok()) {
            server.port = port;
        }
        self.server = Some(server);
    }
}
