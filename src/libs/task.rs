use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A user-owned to-do item with optional due date, tag, and completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i64>,
    pub user_id: Option<i64>,
    pub title: String,
    pub description: String,
    pub tag_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub completed: bool,
}

impl Task {
    pub fn new(user_id: i64, title: &str, description: &str, tag_id: Option<i64>, date: Option<NaiveDate>) -> Self {
        Task {
            id: None,
            user_id: Some(user_id),
            title: title.to_string(),
            description: description.to_string(),
            tag_id,
            date,
            completed: false,
        }
    }
}

/// A named, derived subset of a user's tasks, computed by query predicate.
///
/// A task with a NULL date never matches `Today` or `Overdue`; the SQL
/// comparison itself excludes it. Such tasks still appear in `Active` and,
/// once completed, in `Completed`.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    /// Incomplete tasks, optionally narrowed by a case-insensitive
    /// substring match against title or description.
    Active { search: Option<String> },
    /// Incomplete tasks due exactly today.
    Today,
    /// Incomplete tasks due strictly before today.
    Overdue,
    /// Completed tasks, regardless of date.
    Completed,
    /// Incomplete tasks referencing the given tag.
    ByTag(i64),
}
