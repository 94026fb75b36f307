use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "doable.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let conn: Connection = Connection::open(db_file_path)?;

        // Cascade deletes on the tag->task and user->record foreign keys
        // depend on this pragma; SQLite leaves it off by default.
        conn.pragma_update(None, "foreign_keys", true)?;

        Ok(Db { conn })
    }
}
