//! Form binding and validation for the web layer.
//!
//! Each form pairs a raw-data struct (deserialized straight from an HTTP
//! POST body, everything a string) with a validator that either produces
//! typed field values or a [`FormErrors`] map keyed by field name. Selectable
//! tag choices are resolved against the owner's tags before validation, so a
//! tag id belonging to another user fails as an invalid choice rather than
//! leaking into the task.

use crate::db::tags::Tags;
use crate::libs::messages::Message;
use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum length for task titles and tag names.
pub const MAX_NAME_LENGTH: usize = 200;

/// Field-keyed validation errors, rendered as JSON in error responses.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: &str, message: Message) {
        self.errors.entry(field.to_string()).or_default().push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages recorded for one field, if any.
    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(|v| v.as_slice())
    }
}

/// Raw task form input as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFormData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Selected tag id as a string; empty means no tag.
    #[serde(default)]
    pub tag: String,
    /// Due date in `YYYY-MM-DD` format; empty means no date.
    #[serde(default)]
    pub date: String,
}

/// Validated task field values, ready to store.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub tag_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

/// Task form bound to one user's selectable tags.
pub struct TaskForm {
    user_id: i64,
    /// Tag ids this user may pick. Resolved once when the form is built.
    choices: Vec<i64>,
    /// Tag preselected by the route (the tag-scoped creation form).
    pub initial_tag: Option<i64>,
}

impl TaskForm {
    /// Builds a form for `user_id`, restricting tag choices to their own
    /// tags. When `initial_tag` is set it must be one of those tags.
    pub fn for_user(user_id: i64, tags: &mut Tags, initial_tag: Option<i64>) -> Result<Self> {
        let choices: Vec<i64> = tags.list(user_id)?.into_iter().filter_map(|t| t.id).collect();
        Ok(Self {
            user_id,
            choices,
            initial_tag,
        })
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Validates raw input into typed fields or a field-keyed error map.
    pub fn validate(&self, data: &TaskFormData) -> Result<TaskFields, FormErrors> {
        let mut errors = FormErrors::default();

        let title = data.title.trim().to_string();
        if title.is_empty() {
            errors.add("title", Message::FieldRequired("title".to_string()));
        } else if title.len() > MAX_NAME_LENGTH {
            errors.add("title", Message::FieldTooLong("title".to_string(), MAX_NAME_LENGTH));
        }

        let tag_id = match data.tag.trim() {
            "" => self.initial_tag,
            raw => match raw.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.add("tag", Message::InvalidTagChoice(raw.to_string()));
                    None
                }
            },
        };
        if let Some(id) = tag_id {
            if !self.choices.contains(&id) {
                errors.add("tag", Message::TagNotSelectable);
            }
        }

        let date = match data.date.trim() {
            "" => None,
            raw => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.add("date", Message::InvalidDate(raw.to_string()));
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(TaskFields {
            title,
            description: data.description.trim().to_string(),
            tag_id,
            date,
        })
    }
}

/// Raw tag form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagFormData {
    #[serde(default)]
    pub name: String,
}

/// Tag form validator. Duplicate names are allowed, only shape is checked.
pub struct TagForm;

impl TagForm {
    pub fn validate(data: &TagFormData) -> Result<String, FormErrors> {
        let mut errors = FormErrors::default();

        let name = data.name.trim().to_string();
        if name.is_empty() {
            errors.add("name", Message::FieldRequired("name".to_string()));
        } else if name.len() > MAX_NAME_LENGTH {
            errors.add("name", Message::FieldTooLong("name".to_string(), MAX_NAME_LENGTH));
        }

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(name)
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterFormData {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

/// Validated registration fields. The password is still plaintext here;
/// hashing happens in the handler.
#[derive(Debug, Clone)]
pub struct RegisterFields {
    pub username: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: String,
}

/// Registration form validator.
///
/// Username uniqueness is checked in the handler against the store and
/// merged into the same error map.
pub struct RegisterForm;

impl RegisterForm {
    pub fn validate(data: &RegisterFormData) -> Result<RegisterFields, FormErrors> {
        let mut errors = FormErrors::default();

        let username = data.username.trim().to_string();
        if username.is_empty() {
            errors.add("username", Message::FieldRequired("username".to_string()));
        } else if username.len() > MAX_NAME_LENGTH {
            errors.add("username", Message::FieldTooLong("username".to_string(), MAX_NAME_LENGTH));
        }

        if data.password1.is_empty() {
            errors.add("password1", Message::FieldRequired("password1".to_string()));
        }
        if data.password1 != data.password2 {
            errors.add("password2", Message::PasswordMismatch);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let optional = |raw: &str| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(RegisterFields {
            username,
            email: optional(&data.email),
            first_name: optional(&data.first_name),
            last_name: optional(&data.last_name),
            password: data.password1.clone(),
        })
    }
}
