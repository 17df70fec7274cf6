//! Form input validation for the login and task forms.
//!
//! Validators return the cleaned value or a user-facing message; pages show the
//! message as-is.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::TaskPatch;
use crate::util::color::note_color;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const TASK_FIELDS_REQUIRED: &str = "Please fill in the required fields.";
pub const TASK_FIELDS_BLANK: &str = "Title and description cannot be empty.";

/// Trim and check an email address: `local@domain.tld` with a letters-only
/// TLD of at least two characters.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if is_valid_email(email) { Ok(email.to_owned()) } else { Err(EMAIL_INVALID) }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c)) {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Raw values of the task form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub color: String,
}

impl TaskDraft {
    /// Form prefilled for creating a new task.
    pub fn blank() -> Self {
        Self {
            color: note_color(None),
            ..Self::default()
        }
    }

    /// Form prefilled from an existing task for editing.
    pub fn from_task(task: &crate::net::types::Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            color: note_color(Some(&task.color)),
        }
    }
}

/// Check a task draft and build the request body.
///
/// The title is required; title and description must both contain more than
/// whitespace. `user_id` is the signed-in user, attached as the owner.
pub fn validate_task(draft: &TaskDraft, user_id: Option<String>) -> Result<TaskPatch, &'static str> {
    if draft.title.is_empty() {
        return Err(TASK_FIELDS_REQUIRED);
    }
    if draft.title.trim().is_empty() || draft.description.trim().is_empty() {
        return Err(TASK_FIELDS_BLANK);
    }
    Ok(TaskPatch {
        user_id,
        title: Some(draft.title.clone()),
        color: Some(note_color(Some(&draft.color))),
        description: Some(draft.description.clone()),
        completed: None,
    })
}
