//! Core library modules for the doable application.
//!
//! Serves as the main entry point for all doable library components,
//! providing a centralized access point to the application's core
//! functionality.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage, messaging
//! - **Domain Model**: Task lifecycle, partition filters, sidebar summaries
//! - **Web Support**: Form binding and validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doable::libs::task::Task;
//! use doable::db::tasks::Tasks;
//!
//! let task = Task::new(1, "Implement feature", "Add user authentication", None, None);
//! let mut tasks_db = Tasks::new()?;
//! tasks_db.insert(&task)?;
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod data_storage;
pub mod forms;
pub mod messages;
pub mod summary;
pub mod task;
