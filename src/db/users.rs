use super::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

pub(crate) const SCHEMA_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,
    email TEXT,
    first_name TEXT,
    last_name TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_USER: &str = "INSERT INTO users (username, password_hash, email, first_name, last_name) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_USER_BY_ID: &str = "SELECT id, username, password_hash, email, first_name, last_name FROM users WHERE id = ?1";
const SELECT_USER_BY_USERNAME: &str = "SELECT id, username, password_hash, email, first_name, last_name FROM users WHERE username = ?1";

/// An account record. The password is stored only as an argon2 hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub password_hash: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

pub struct Users {
    conn: Connection,
}

impl Users {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_USERS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Create a new user, returning the assigned id
    pub fn create(&mut self, user: &User) -> Result<i64> {
        self.conn.execute(
            INSERT_USER,
            params![user.username, user.password_hash, user.email, user.first_name, user.last_name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get a user by ID
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_ID, params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Get a user by username
    pub fn get_by_username(&mut self, username: &str) -> Result<Option<User>> {
        self.conn
            .query_row(SELECT_USER_BY_USERNAME, params![username], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
        Ok(User {
            id: row.get(0)?,
            username: row.get(1)?,
            password_hash: row.get(2)?,
            email: row.get(3)?,
            first_name: row.get(4)?,
            last_name: row.get(5)?,
        })
    }
}
