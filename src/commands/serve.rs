//! Web server boot command.
//!
//! Opens the database, applies pending migrations, builds the router, and
//! serves HTTP until interrupted. The listen address comes from the config
//! file with optional command-line overrides on top.

use crate::db::db::Db;
use crate::db::migrations;
use crate::libs::{config::Config, messages::Message};
use crate::web::routes::build_router;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;
use tokio::net::TcpListener;

/// Command-line arguments for the serve command.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address, overriding the configured one
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overriding the configured one
    #[arg(long)]
    port: Option<u16>,
}

/// Boots the web server.
pub async fn cmd(serve_args: ServeArgs) -> Result<()> {
    let mut server = Config::read()?.server();
    if let Some(host) = serve_args.host {
        server.host = host;
    }
    if let Some(port) = serve_args.port {
        server.port = port;
    }

    // Bring the schema up to date before accepting requests
    let mut db = Db::new()?;
    migrations::init_with_migrations(&mut db.conn)?;

    let addr = format!("{}:{}", server.host, server.port);
    msg_print!(Message::ServerStarting(addr.clone()));

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, build_router()).await?;

    msg_info!(Message::ServerStopped);
    Ok(())
}
