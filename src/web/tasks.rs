//! Task pages: partition lists, creation, detail/edit, completion toggling,
//! and deletion.
//!
//! The URL surface has one route family per partition (all, overdue, today,
//! completed) plus a tag-filtered family. All families share the same six
//! operations; the thin named handlers only pin down the partition so that
//! each mutation can redirect back to the list it came from.
//!
//! Every operation is owner-scoped. A task that does not exist and a task
//! owned by another user are both reported as NotFound.

use super::context::PageContext;
use super::error::AppError;
use super::session::AuthUser;
use crate::db::tags::Tags;
use crate::db::tasks::Tasks;
use crate::libs::forms::{TaskForm, TaskFormData};
use crate::libs::messages::Message;
use crate::libs::summary::Summary;
use crate::libs::task::{Task, TaskFilter};
use axum::extract::{Path, Query};
use axum::response::Redirect;
use axum::{Form, Json};
use chrono::Local;
use serde::Deserialize;

/// The four partition views a task list page can show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Partition {
    All,
    Overdue,
    Today,
    Completed,
}

impl Partition {
    fn filter(&self, search: Option<String>) -> TaskFilter {
        match self {
            Partition::All => TaskFilter::Active { search },
            Partition::Overdue => TaskFilter::Overdue,
            Partition::Today => TaskFilter::Today,
            Partition::Completed => TaskFilter::Completed,
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Partition::All => "Tasks",
            Partition::Overdue => "Overdue Tasks",
            Partition::Today => "Today Tasks",
            Partition::Completed => "Completed Tasks",
        }
    }

    /// The list page mutations in this partition redirect back to.
    fn list_path(&self) -> &'static str {
        match self {
            Partition::All => "/tasks",
            Partition::Overdue => "/overdue_tasks",
            Partition::Today => "/today_tasks",
            Partition::Completed => "/completed_tasks",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

// === SHARED OPERATIONS ===

fn list_context(user: &AuthUser, partition: Partition, search: Option<String>) -> Result<PageContext, AppError> {
    let mut tasks = Tasks::new()?;
    let items = tasks.fetch(user.id, &partition.filter(search))?;
    Ok(PageContext::task_list(partition.title(), Summary::fetch(user.id)?, items))
}

fn create_in(user: &AuthUser, partition: Partition, data: &TaskFormData) -> Result<Redirect, AppError> {
    let mut tags = Tags::new()?;
    let form = TaskForm::for_user(user.id, &mut tags, None)?;
    let fields = form.validate(data).map_err(AppError::Validation)?;

    // A form without a date means "due today", not "no date".
    let date = fields.date.unwrap_or_else(|| Local::now().date_naive());

    let mut tasks = Tasks::new()?;
    tasks.insert(&Task::new(user.id, &fields.title, &fields.description, fields.tag_id, Some(date)))?;
    Ok(Redirect::to(partition.list_path()))
}

fn detail_context(user: &AuthUser, partition: Partition, id: i64) -> Result<PageContext, AppError> {
    let mut tasks = Tasks::new()?;
    let task = tasks.get(user.id, id)?.ok_or_else(|| AppError::NotFound(Message::TaskNotFound.to_string()))?;
    Ok(PageContext::task_detail(partition.title(), Summary::fetch(user.id)?, task))
}

fn edit_in(user: &AuthUser, partition: Partition, id: i64, data: &TaskFormData) -> Result<Redirect, AppError> {
    let mut tasks = Tasks::new()?;
    let existing = tasks.get(user.id, id)?.ok_or_else(|| AppError::NotFound(Message::TaskNotFound.to_string()))?;

    let mut tags = Tags::new()?;
    let form = TaskForm::for_user(user.id, &mut tags, None)?;
    let fields = form.validate(data).map_err(AppError::Validation)?;

    let task = Task {
        id: existing.id,
        user_id: existing.user_id,
        title: fields.title,
        description: fields.description,
        tag_id: fields.tag_id,
        date: fields.date,
        completed: existing.completed,
    };
    tasks.update(&task)?;
    Ok(Redirect::to(partition.list_path()))
}

fn toggle_in(user: &AuthUser, partition: Partition, id: i64) -> Result<Redirect, AppError> {
    let mut tasks = Tasks::new()?;
    match tasks.toggle(user.id, id)? {
        Some(_) => Ok(Redirect::to(partition.list_path())),
        None => Err(AppError::NotFound(Message::TaskNotFound.to_string())),
    }
}

fn delete_in(user: &AuthUser, partition: Partition, id: i64) -> Result<Redirect, AppError> {
    let mut tasks = Tasks::new()?;
    if tasks.delete(user.id, id)? == 0 {
        return Err(AppError::NotFound(Message::TaskNotFound.to_string()));
    }
    Ok(Redirect::to(partition.list_path()))
}

// === ALL / ACTIVE FAMILY ===

pub async fn all_tasks(user: AuthUser, Query(params): Query<SearchParams>) -> Result<Json<PageContext>, AppError> {
    Ok(Json(list_context(&user, Partition::All, params.search)?))
}

pub async fn create_task(user: AuthUser, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    create_in(&user, Partition::All, &data)
}

pub async fn task_detail(user: AuthUser, Path(id): Path<i64>) -> Result<Json<PageContext>, AppError> {
    Ok(Json(detail_context(&user, Partition::All, id)?))
}

pub async fn edit_task(user: AuthUser, Path(id): Path<i64>, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    edit_in(&user, Partition::All, id, &data)
}

pub async fn todo_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    toggle_in(&user, Partition::All, id)
}

pub async fn delete_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    delete_in(&user, Partition::All, id)
}

// === OVERDUE FAMILY ===

pub async fn overdue_tasks(user: AuthUser) -> Result<Json<PageContext>, AppError> {
    Ok(Json(list_context(&user, Partition::Overdue, None)?))
}

pub async fn create_overdue_task(user: AuthUser, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    create_in(&user, Partition::Overdue, &data)
}

pub async fn overdue_task_detail(user: AuthUser, Path(id): Path<i64>) -> Result<Json<PageContext>, AppError> {
    Ok(Json(detail_context(&user, Partition::Overdue, id)?))
}

pub async fn edit_overdue_task(user: AuthUser, Path(id): Path<i64>, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    edit_in(&user, Partition::Overdue, id, &data)
}

pub async fn todo_overdue_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    toggle_in(&user, Partition::Overdue, id)
}

pub async fn delete_overdue_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    delete_in(&user, Partition::Overdue, id)
}

// === TODAY FAMILY ===

pub async fn today_tasks(user: AuthUser) -> Result<Json<PageContext>, AppError> {
    Ok(Json(list_context(&user, Partition::Today, None)?))
}

pub async fn create_today_task(user: AuthUser, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    create_in(&user, Partition::Today, &data)
}

pub async fn today_task_detail(user: AuthUser, Path(id): Path<i64>) -> Result<Json<PageContext>, AppError> {
    Ok(Json(detail_context(&user, Partition::Today, id)?))
}

pub async fn edit_today_task(user: AuthUser, Path(id): Path<i64>, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    edit_in(&user, Partition::Today, id, &data)
}

pub async fn todo_today_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    toggle_in(&user, Partition::Today, id)
}

pub async fn delete_today_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    delete_in(&user, Partition::Today, id)
}

// === COMPLETED FAMILY ===

pub async fn completed_tasks(user: AuthUser) -> Result<Json<PageContext>, AppError> {
    Ok(Json(list_context(&user, Partition::Completed, None)?))
}

/// Creates a task from the completed list page. New tasks start active, so
/// the redirect lands on the main task list rather than back here.
pub async fn create_completed_task(user: AuthUser, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    create_in(&user, Partition::All, &data)
}

pub async fn completed_task_detail(user: AuthUser, Path(id): Path<i64>) -> Result<Json<PageContext>, AppError> {
    Ok(Json(detail_context(&user, Partition::Completed, id)?))
}

pub async fn edit_completed_task(user: AuthUser, Path(id): Path<i64>, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    edit_in(&user, Partition::Completed, id, &data)
}

/// Reopens a completed task.
pub async fn cancel_todo_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    toggle_in(&user, Partition::Completed, id)
}

pub async fn delete_completed_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    delete_in(&user, Partition::Completed, id)
}

// === TAG-FILTERED FAMILY ===

fn tag_list_path(tag_id: i64) -> String {
    format!("/filter_by_tag/{}", tag_id)
}

/// Redirect target after mutating a task inside the tag-filtered view.
///
/// When the task carries no tag the filter page it came from no longer
/// applies, so fall back to the main task list.
fn filtered_redirect(tag_id: Option<i64>) -> Redirect {
    match tag_id {
        Some(tag_id) => Redirect::to(&tag_list_path(tag_id)),
        None => Redirect::to("/tasks"),
    }
}

pub async fn filter_by_tag(user: AuthUser, Path(tag_id): Path<i64>) -> Result<Json<PageContext>, AppError> {
    let mut tags = Tags::new()?;
    let tag = tags.get(user.id, tag_id)?.ok_or_else(|| AppError::NotFound(Message::TagNotFound.to_string()))?;

    let mut tasks = Tasks::new()?;
    let items = tasks.fetch(user.id, &TaskFilter::ByTag(tag_id))?;
    let title = tag.name.clone();
    Ok(Json(PageContext::filtered_list(&title, Summary::fetch(user.id)?, tag, items)))
}

/// Creates a task from the tag-filtered page. The tag is preselected by the
/// route and applies when the form leaves the tag field empty.
pub async fn create_filtered_task(user: AuthUser, Path(tag_id): Path<i64>, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    let mut tags = Tags::new()?;
    if tags.get(user.id, tag_id)?.is_none() {
        return Err(AppError::NotFound(Message::TagNotFound.to_string()));
    }

    let form = TaskForm::for_user(user.id, &mut tags, Some(tag_id))?;
    let fields = form.validate(&data).map_err(AppError::Validation)?;
    let date = fields.date.unwrap_or_else(|| Local::now().date_naive());

    let mut tasks = Tasks::new()?;
    tasks.insert(&Task::new(user.id, &fields.title, &fields.description, fields.tag_id, Some(date)))?;
    Ok(Redirect::to(&tag_list_path(tag_id)))
}

pub async fn filtered_task_detail(user: AuthUser, Path((tag_id, task_id)): Path<(i64, i64)>) -> Result<Json<PageContext>, AppError> {
    let mut tags = Tags::new()?;
    let tag = tags.get(user.id, tag_id)?.ok_or_else(|| AppError::NotFound(Message::TagNotFound.to_string()))?;

    let mut tasks = Tasks::new()?;
    let task = tasks.get(user.id, task_id)?.ok_or_else(|| AppError::NotFound(Message::TaskNotFound.to_string()))?;

    let title = tag.name.clone();
    let mut ctx = PageContext::task_detail(&title, Summary::fetch(user.id)?, task);
    ctx.tag = Some(tag);
    Ok(Json(ctx))
}

pub async fn edit_filtered_task(user: AuthUser, Path((tag_id, task_id)): Path<(i64, i64)>, Form(data): Form<TaskFormData>) -> Result<Redirect, AppError> {
    let mut tags = Tags::new()?;
    if tags.get(user.id, tag_id)?.is_none() {
        return Err(AppError::NotFound(Message::TagNotFound.to_string()));
    }

    let mut tasks = Tasks::new()?;
    let existing = tasks.get(user.id, task_id)?.ok_or_else(|| AppError::NotFound(Message::TaskNotFound.to_string()))?;

    let form = TaskForm::for_user(user.id, &mut tags, Some(tag_id))?;
    let fields = form.validate(&data).map_err(AppError::Validation)?;

    let task = Task {
        id: existing.id,
        user_id: existing.user_id,
        title: fields.title,
        description: fields.description,
        tag_id: fields.tag_id,
        date: fields.date,
        completed: existing.completed,
    };
    tasks.update(&task)?;
    Ok(filtered_redirect(fields.tag_id))
}

pub async fn todo_filtered_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    let mut tasks = Tasks::new()?;
    match tasks.toggle(user.id, id)? {
        Some(task) => Ok(filtered_redirect(task.tag_id)),
        None => Err(AppError::NotFound(Message::TaskNotFound.to_string())),
    }
}

pub async fn delete_tagged_task(user: AuthUser, Path(id): Path<i64>) -> Result<Redirect, AppError> {
    let mut tasks = Tasks::new()?;

    // Capture the tag before the row goes away; it decides the redirect.
    let task = tasks.get(user.id, id)?.ok_or_else(|| AppError::NotFound(Message::TaskNotFound.to_string()))?;
    tasks.delete(user.id, id)?;
    Ok(filtered_redirect(task.tag_id))
}
