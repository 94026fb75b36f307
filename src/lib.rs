//! # Doable - Personal Task Management on the Web
//!
//! A self-hosted web application for creating, tagging, and completing
//! personal tasks, with views segmented by temporal status.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, and delete tasks
//! - **Partitioned Views**: Overdue, today, active, and completed lists
//! - **Tag System**: Organize tasks with custom tags and filter by them
//! - **Search**: Substring search across titles and descriptions
//! - **Accounts**: Registration, login, and per-user data isolation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doable::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
