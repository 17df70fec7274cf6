//! Wire DTOs for the remote task API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Deserialization is lenient
//! where the API is loose (numeric ids, missing color/description) so one odd
//! record never fails a whole list load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::util::color::note_color;

/// A sticky-note task owned by one user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Server-assigned identifier.
    #[serde(alias = "_id", deserialize_with = "deserialize_id")]
    pub id: String,
    /// Owning user, when the API reports it.
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub user_id: Option<String>,
    pub title: String,
    /// Background color as canonical `#rrggbb`.
    #[serde(default = "default_color", deserialize_with = "deserialize_color")]
    pub color: String,
    /// Rich-text body as an HTML string.
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    /// Creation timestamp as sent by the API: ISO 8601, or epoch
    /// milliseconds rendered as a decimal string.
    #[serde(default, deserialize_with = "deserialize_optional_scalar")]
    pub created_at: Option<String>,
}

/// Partial task body for create and update calls. `None` fields are omitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Body that only flips the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }
}

/// User summary returned by `/auth/login` and `/auth/register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Empty when the API omits the id or sends `null`.
    #[serde(default, alias = "_id", deserialize_with = "deserialize_nullable_id")]
    pub id: String,
    pub email: String,
}

/// Body of a successful authentication call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthUser>,
}

/// Request body for both auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailRequest<'a> {
    pub email: &'a str,
}

fn default_color() -> String {
    note_color(None)
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(note_color(raw.as_deref()))
}

fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_scalar(deserializer)?.ok_or_else(|| D::Error::custom("expected id"))
}

fn deserialize_nullable_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(deserialize_optional_scalar(deserializer)?.unwrap_or_default())
}

/// String or number as an optional string; `null` reads as `None`.
fn deserialize_optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(s) => Ok(Some(s)),
        serde_json::Value::Number(n) => Ok(Some(n.to_string())),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
