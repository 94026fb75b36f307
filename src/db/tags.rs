use super::db::Db;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

// Tag names are not UNIQUE; duplicates per user are permitted.
pub(crate) const SCHEMA_TAGS: &str = "CREATE TABLE IF NOT EXISTS tags (
    id INTEGER PRIMARY KEY,
    user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TAG: &str = "INSERT INTO tags (user_id, name) VALUES (?1, ?2)";
const UPDATE_TAG: &str = "UPDATE tags SET name = ?3 WHERE id = ?1 AND user_id = ?2";
const DELETE_TAG: &str = "DELETE FROM tags WHERE id = ?1 AND user_id = ?2";
const SELECT_TAGS_BY_USER: &str = "SELECT id, user_id, name FROM tags WHERE user_id = ?1";
const SELECT_FIRST_TAGS: &str = "SELECT id, user_id, name FROM tags WHERE user_id = ?1 LIMIT ?2";
const SELECT_TAG: &str = "SELECT id, user_id, name FROM tags WHERE id = ?1 AND user_id = ?2";
const COUNT_TAGS: &str = "SELECT COUNT(*) FROM tags WHERE user_id = ?1";

/// A user-owned label used to group tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub name: String,
}

impl Tag {
    pub fn new(user_id: i64, name: String) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            name,
        }
    }
}

pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Ensure tables exist in dependency order (migration v1 creates
        // them, but we ensure here too)
        db.conn.execute(super::users::SCHEMA_USERS, [])?;
        db.conn.execute(SCHEMA_TAGS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new tag, returning the assigned id
    pub fn create(&mut self, tag: &Tag) -> Result<i64> {
        self.conn.execute(INSERT_TAG, params![tag.user_id, tag.name])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Rename a tag. Owner-scoped: a foreign id looks like a missing one.
    pub fn update(&mut self, user_id: i64, id: i64, name: &str) -> Result<()> {
        let affected = self.conn.execute(UPDATE_TAG, params![id, user_id, name])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TagNotFound));
        }
        Ok(())
    }

    /// Delete a tag. The foreign key cascades to every task referencing it.
    /// Returns the number of deleted tag rows (0 when absent or foreign).
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TAG, params![id, user_id])?;
        Ok(affected)
    }

    /// Get all tags owned by a user, in store order
    pub fn list(&mut self, user_id: i64) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_TAGS_BY_USER)?;
        let tag_iter = stmt.query_map(params![user_id], Self::map_row)?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    /// Get the first `limit` tags for the summary strip
    pub fn first(&mut self, user_id: i64, limit: i64) -> Result<Vec<Tag>> {
        let mut stmt = self.conn.prepare(SELECT_FIRST_TAGS)?;
        let tag_iter = stmt.query_map(params![user_id, limit], Self::map_row)?;

        let mut tags = Vec::new();
        for tag in tag_iter {
            tags.push(tag?);
        }
        Ok(tags)
    }

    /// Get a tag by ID, owner-scoped
    pub fn get(&mut self, user_id: i64, id: i64) -> Result<Option<Tag>> {
        self.conn
            .query_row(SELECT_TAG, params![id, user_id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Count a user's tags
    pub fn count(&mut self, user_id: i64) -> Result<i64> {
        let count = self.conn.query_row(COUNT_TAGS, params![user_id], |row| row.get(0))?;
        Ok(count)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Tag> {
        Ok(Tag {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
        })
    }
}
