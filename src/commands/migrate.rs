//! Manual migration management command.
//!
//! `doable serve` applies pending migrations automatically; this command
//! exists for applying them ahead of a deploy and for inspecting the
//! current schema state.

use crate::db::db::Db;
use crate::db::migrations::{self, MigrationManager};
use crate::libs::messages::Message;
use crate::msg_info;
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the migrate command.
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Show the current schema version and applied migrations
    #[arg(long)]
    status: bool,
}

/// Applies pending migrations, or reports migration status.
pub fn cmd(migrate_args: MigrateArgs) -> Result<()> {
    let mut db = Db::new()?;

    if migrate_args.status {
        msg_info!(Message::DatabaseVersion(migrations::get_db_version(&db.conn)?));

        let manager = MigrationManager::new();
        for (version, name, applied_at) in manager.get_migration_history(&db.conn)? {
            println!("  v{} {} ({})", version, name, applied_at);
        }

        if !migrations::needs_migration(&db.conn)? {
            msg_info!(Message::DatabaseUpToDate);
        }
        return Ok(());
    }

    migrations::init_with_migrations(&mut db.conn)
}
