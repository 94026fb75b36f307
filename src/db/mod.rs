//! Database layer for the doable application.
//!
//! Provides a complete data persistence layer built on SQLite, offering
//! type-safe database operations for all application entities. Implements a
//! migration system for schema evolution and provides specialized modules for
//! each entity.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Connection management and migrations
//! - **Accounts**: User records with hashed credentials
//! - **Task Management**: Tasks with partitioned queries and ownership scoping
//! - **Organization**: Tag-based grouping with cascade deletes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use doable::db::tasks::Tasks;
//! use doable::libs::task::{Task, TaskFilter};
//!
//! let mut tasks = Tasks::new()?;
//! let task = Task::new(1, "Review code", "Check the open PR", None, None);
//! tasks.insert(&task)?;
//! let active = tasks.fetch(1, &TaskFilter::Active { search: None })?;
//! # anyhow::Ok(())
//! ```

/// Core database connection and initialization module.
///
/// Provides the fundamental `Db` struct that manages SQLite connections
/// and ensures foreign key enforcement is switched on.
pub mod db;

/// Database schema migration system.
///
/// Handles versioned schema changes, tracks migration history, and provides
/// development-time migration management commands.
pub mod migrations;

/// Task categorization and organization system.
///
/// Provides tag-based grouping for tasks. Deleting a tag cascades to the
/// tasks referencing it.
pub mod tags;

/// Core task management operations.
///
/// Handles CRUD operations for user tasks, including partitioned queries,
/// completion toggling, and ownership scoping.
pub mod tasks;

/// Account storage.
///
/// Stores user records; passwords are kept only as argon2 hashes.
pub mod users;
