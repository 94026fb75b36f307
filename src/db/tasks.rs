use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::Local;
use rusqlite::{params, params_from_iter, types::Value, Connection, OptionalExtension};

pub(crate) const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY,
    user_id INTEGER REFERENCES users(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    tag_id INTEGER REFERENCES tags(id) ON DELETE CASCADE,
    date DATE,
    completed BOOLEAN NOT NULL DEFAULT 0,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";
const INSERT_TASK: &str = "INSERT INTO tasks (user_id, title, description, tag_id, date, completed) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_TASKS: &str = "SELECT id, user_id, title, description, tag_id, date, completed FROM tasks";
const SELECT_TASK: &str = "SELECT id, user_id, title, description, tag_id, date, completed FROM tasks WHERE id = ?1 AND user_id = ?2";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?3, description = ?4, tag_id = ?5, date = ?6, completed = ?7 WHERE id = ?1 AND user_id = ?2";
const TOGGLE_TASK: &str = "UPDATE tasks SET completed = ?3 WHERE id = ?1 AND user_id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1 AND user_id = ?2";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        // Ensure tables exist in dependency order (migration v1 creates
        // them, but we ensure here too)
        db.conn.execute(super::users::SCHEMA_USERS, [])?;
        db.conn.execute(super::tags::SCHEMA_TAGS, [])?;
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Self { conn: db.conn })
    }

    /// Insert a task, returning the assigned id
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![task.user_id, task.title, task.description, task.tag_id, task.date, task.completed],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetch a user's tasks for one partition.
    ///
    /// No ORDER BY is applied; rows come back in store order.
    pub fn fetch(&mut self, user_id: i64, filter: &TaskFilter) -> Result<Vec<Task>> {
        let (clause, mut filter_params) = Self::filter_clause(filter);
        let mut sql_params: Vec<Value> = vec![Value::from(user_id)];
        sql_params.append(&mut filter_params);

        let sql = format!("{} WHERE user_id = ?{}", SELECT_TASKS, clause);
        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(sql_params.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Count a user's tasks for one partition
    pub fn count(&mut self, user_id: i64, filter: &TaskFilter) -> Result<i64> {
        let (clause, mut filter_params) = Self::filter_clause(filter);
        let mut sql_params: Vec<Value> = vec![Value::from(user_id)];
        sql_params.append(&mut filter_params);

        let sql = format!("SELECT COUNT(*) FROM tasks WHERE user_id = ?{}", clause);
        let count = self.conn.query_row(&sql, params_from_iter(sql_params.iter()), |row| row.get(0))?;
        Ok(count)
    }

    /// Get a task by ID, owner-scoped.
    ///
    /// A task owned by another user resolves to `None`, indistinguishable
    /// from a missing record.
    pub fn get(&mut self, user_id: i64, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(SELECT_TASK, params![id, user_id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Update a task in place, owner-scoped
    pub fn update(&mut self, task: &Task) -> Result<()> {
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![task.id, task.user_id, task.title, task.description, task.tag_id, task.date, task.completed],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound));
        }
        Ok(())
    }

    /// Flip a task's completed flag inside a single transaction.
    ///
    /// Returns the updated task, or `None` when the id is absent or owned
    /// by someone else. Toggling twice restores the original state.
    pub fn toggle(&mut self, user_id: i64, id: i64) -> Result<Option<Task>> {
        let tx = self.conn.transaction()?;

        let task = tx.query_row(SELECT_TASK, params![id, user_id], Self::map_row).optional()?;

        let mut task = match task {
            Some(task) => task,
            None => return Ok(None),
        };

        task.completed = !task.completed;
        tx.execute(TOGGLE_TASK, params![id, user_id, task.completed])?;
        tx.commit()?;

        Ok(Some(task))
    }

    /// Delete a task permanently, owner-scoped.
    /// Returns the number of deleted rows (0 when absent or foreign).
    pub fn delete(&mut self, user_id: i64, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id, user_id])?;
        Ok(affected)
    }

    /// Compile a partition filter into a SQL predicate and its parameters.
    ///
    /// The predicate is appended to the owner check; `?` placeholders bind
    /// sequentially after the user id. A NULL date fails both date
    /// comparisons, which keeps dateless tasks out of Today and Overdue.
    fn filter_clause(filter: &TaskFilter) -> (String, Vec<Value>) {
        match filter {
            TaskFilter::Active { search: None } => (" AND completed = 0".to_string(), vec![]),
            TaskFilter::Active { search: Some(term) } => {
                // LIKE wildcards in the term itself must stay literal
                let escaped = term.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
                let pattern = format!("%{}%", escaped);
                (
                    " AND completed = 0 AND (title LIKE ? ESCAPE '\\' OR description LIKE ? ESCAPE '\\')".to_string(),
                    vec![Value::from(pattern.clone()), Value::from(pattern)],
                )
            }
            TaskFilter::Today => (
                " AND completed = 0 AND date = ?".to_string(),
                vec![Value::from(Local::now().date_naive().to_string())],
            ),
            TaskFilter::Overdue => (
                " AND completed = 0 AND date < ?".to_string(),
                vec![Value::from(Local::now().date_naive().to_string())],
            ),
            TaskFilter::Completed => (" AND completed = 1".to_string(), vec![]),
            TaskFilter::ByTag(tag_id) => (" AND completed = 0 AND tag_id = ?".to_string(), vec![Value::from(*tag_id)]),
        }
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            user_id: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            tag_id: row.get(4)?,
            date: row.get(5)?,
            completed: row.get(6)?,
        })
    }
}
