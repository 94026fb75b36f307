//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that guides users through
//! configuring doable for first-time use: listen address and port for the
//! web server.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

/// Executes the initialization command.
///
/// Runs the interactive configuration wizard, or removes the existing
/// configuration when `--delete` is used.
pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        let config_path = crate::libs::data_storage::DataStorage::new().get_path(crate::libs::config::CONFIG_FILE_NAME)?;
        if config_path.exists() {
            std::fs::remove_file(config_path)?;
        }
        return Ok(());
    }

    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
