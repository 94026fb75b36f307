//! Route table.
//!
//! The URL layout keeps one route family per task partition so each page
//! can link its own toggle/delete actions and mutations can redirect back
//! to the list they came from.

use super::state::{AppState, SharedState};
use super::{auth, tags, tasks};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Builds the application router with a fresh shared state.
pub fn build_router() -> Router {
    build_router_with_state(Arc::new(AppState::new()))
}

/// Builds the application router over an existing state, letting tests
/// share the session store with the server under test.
pub fn build_router_with_state(state: SharedState) -> Router {
    Router::new()
        // Active tasks
        .route("/", get(tasks::all_tasks).post(tasks::create_task))
        .route("/tasks", get(tasks::all_tasks).post(tasks::create_task))
        .route("/task/:id", get(tasks::task_detail).post(tasks::edit_task))
        .route("/todo_task/:id", get(tasks::todo_task))
        .route("/delete_task/:id", get(tasks::delete_task))
        // Overdue tasks
        .route("/overdue_tasks", get(tasks::overdue_tasks).post(tasks::create_overdue_task))
        .route("/overdue_task/:id", get(tasks::overdue_task_detail).post(tasks::edit_overdue_task))
        .route("/todo_overdue_task/:id", get(tasks::todo_overdue_task))
        .route("/delete_overdue_task/:id", get(tasks::delete_overdue_task))
        // Today tasks
        .route("/today_tasks", get(tasks::today_tasks).post(tasks::create_today_task))
        .route("/today_task/:id", get(tasks::today_task_detail).post(tasks::edit_today_task))
        .route("/todo_today_task/:id", get(tasks::todo_today_task))
        .route("/delete_today_task/:id", get(tasks::delete_today_task))
        // Completed tasks
        .route("/completed_tasks", get(tasks::completed_tasks).post(tasks::create_completed_task))
        .route("/completed_task/:id", get(tasks::completed_task_detail).post(tasks::edit_completed_task))
        .route("/cancel_todo_task/:id", get(tasks::cancel_todo_task))
        .route("/delete_completed_task/:id", get(tasks::delete_completed_task))
        // Tags
        .route("/all_tags", get(tags::all_tags).post(tags::create_tag))
        .route("/tag/:id", get(tags::tag_detail).post(tags::edit_tag))
        .route("/delete_tag/:id", get(tags::delete_tag))
        // Tag-filtered tasks
        .route("/filter_by_tag/:tag_id", get(tasks::filter_by_tag).post(tasks::create_filtered_task))
        .route("/tag_filter_task/:tag_id/:task_id", get(tasks::filtered_task_detail).post(tasks::edit_filtered_task))
        .route("/todo_filtered_task/:id", get(tasks::todo_filtered_task))
        .route("/delete_tagged_task/:id", get(tasks::delete_tagged_task))
        // Auth
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
        .route("/register", get(auth::register_page).post(auth::register))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
