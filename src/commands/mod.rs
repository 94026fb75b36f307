pub mod init;
pub mod migrate;
pub mod serve;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Run the web server")]
    Serve(serve::ServeArgs),
    #[command(about = "Apply pending database migrations")]
    Migrate(migrate::MigrateArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Serve(args) => serve::cmd(args).await,
            Commands::Migrate(args) => migrate::cmd(args),
        }
    }
}
