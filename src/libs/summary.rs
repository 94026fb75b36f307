//! Per-request sidebar summary.
//!
//! Every page carries the same small summary block: the first couple of the
//! user's tags plus counters for each task partition. The numbers are
//! computed fresh on every request rather than cached, so a mutation is
//! reflected in the very next page load.

use crate::db::tags::{Tag, Tags};
use crate::db::tasks::Tasks;
use crate::libs::task::TaskFilter;
use anyhow::Result;
use serde::Serialize;

/// How many tags the sidebar shows before pointing at the full list.
const SIDEBAR_TAG_LIMIT: i64 = 2;

/// Counters and tag shortlist rendered on every page.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub first_tags: Vec<Tag>,
    pub active_tasks: i64,
    pub completed_tasks: i64,
    pub today_tasks: i64,
    pub overdue_tasks: i64,
}

impl Summary {
    /// Computes the summary for one user.
    pub fn fetch(user_id: i64) -> Result<Self> {
        let mut tags = Tags::new()?;
        let mut tasks = Tasks::new()?;

        Ok(Summary {
            first_tags: tags.first(user_id, SIDEBAR_TAG_LIMIT)?,
            active_tasks: tasks.count(user_id, &TaskFilter::Active { search: None })?,
            completed_tasks: tasks.count(user_id, &TaskFilter::Completed)?,
            today_tasks: tasks.count(user_id, &TaskFilter::Today)?,
            overdue_tasks: tasks.count(user_id, &TaskFilter::Overdue)?,
        })
    }
}
