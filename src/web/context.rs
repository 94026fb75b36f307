//! Page context assembly.
//!
//! Handlers return the data a page needs as one JSON document; rendering
//! happens elsewhere. Every context carries the sidebar [`Summary`] so the
//! partition counters stay correct after any mutation.

use crate::db::tags::Tag;
use crate::libs::summary::Summary;
use crate::libs::task::Task;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PageContext {
    pub title: String,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
}

impl PageContext {
    fn new(title: &str, summary: Summary) -> Self {
        Self {
            title: title.to_string(),
            summary,
            amount: None,
            tasks: None,
            tags: None,
            task: None,
            tag: None,
        }
    }

    /// Context for a task list page.
    pub fn task_list(title: &str, summary: Summary, tasks: Vec<Task>) -> Self {
        let mut ctx = Self::new(title, summary);
        ctx.amount = Some(tasks.len());
        ctx.tasks = Some(tasks);
        ctx
    }

    /// Context for a task detail/edit page.
    pub fn task_detail(title: &str, summary: Summary, task: Task) -> Self {
        let mut ctx = Self::new(title, summary);
        ctx.task = Some(task);
        ctx
    }

    /// Context for the tag list page.
    pub fn tag_list(title: &str, summary: Summary, tags: Vec<Tag>) -> Self {
        let mut ctx = Self::new(title, summary);
        ctx.amount = Some(tags.len());
        ctx.tags = Some(tags);
        ctx
    }

    /// Context for a tag detail/edit page.
    pub fn tag_detail(title: &str, summary: Summary, tag: Tag) -> Self {
        let mut ctx = Self::new(title, summary);
        ctx.tag = Some(tag);
        ctx
    }

    /// Context for a tag-filtered task list.
    pub fn filtered_list(title: &str, summary: Summary, tag: Tag, tasks: Vec<Task>) -> Self {
        let mut ctx = Self::task_list(title, summary, tasks);
        ctx.tag = Some(tag);
        ctx
    }
}
