//! Display implementation for doable application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum,
//! converting structured message data into human-readable text. All
//! user-facing message text is defined in one location, which keeps
//! formatting consistent and makes future localization straightforward.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskNotFound => "Task does not exist or you do not have permission to view it".to_string(),

            // === TAG MESSAGES ===
            Message::TagNotFound => "Tag does not exist or you do not have permission to view it".to_string(),

            // === FORM VALIDATION MESSAGES ===
            Message::FieldRequired(field) => format!("This field is required: {}", field),
            Message::FieldTooLong(field, max) => format!("Field '{}' exceeds the maximum length of {} characters", field, max),
            Message::InvalidDate(value) => format!("'{}' is not a valid date, expected YYYY-MM-DD", value),
            Message::TagNotSelectable => "Select a valid tag, that choice is not one of your tags".to_string(),
            Message::InvalidTagChoice(value) => format!("'{}' is not a valid tag choice", value),
            Message::PasswordMismatch => "The two password fields didn't match".to_string(),
            Message::UsernameTaken(username) => format!("A user with username '{}' already exists", username),

            // === AUTH MESSAGES ===
            Message::InvalidCredentials => "There was an error logging in, try again".to_string(),
            Message::LoggedOut => "You were logged out".to_string(),
            Message::RegistrationSuccessful(username) => format!("Registration successful, welcome {}!", username),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptHost => "Bind host".to_string(),
            Message::PromptPort => "Bind port".to_string(),

            // === SERVER MESSAGES ===
            Message::ServerStarting(addr) => format!("Server running on http://{}", addr),
            Message::ServerStopped => "Server stopped".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rolled back to v{}", version),
        };

        write!(f, "{}", text)
    }
}
