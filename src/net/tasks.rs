//! CRUD calls for `/tasks`.
//!
//! Every call goes through the shared pipeline, so the bearer header and the
//! session-rejection policy apply without anything task-specific here.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use super::error::ApiError;
use super::pipeline::ApiClient;
use super::types::{Task, TaskPatch};

const TASKS_ENDPOINT: &str = "/tasks";

fn task_endpoint(id: &str) -> String {
    format!("{TASKS_ENDPOINT}/{id}")
}

/// Remote task store for the signed-in user.
#[derive(Clone)]
pub struct TaskService {
    client: ApiClient,
}

impl TaskService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// All tasks of the current user.
    ///
    /// # Errors
    ///
    /// Returns the pipeline or decode error.
    pub async fn list(&self) -> Result<Vec<Task>, ApiError> {
        self.client.get_json(TASKS_ENDPOINT).await
    }

    /// Create a task and return the stored record.
    ///
    /// # Errors
    ///
    /// Returns the pipeline or decode error.
    pub async fn create(&self, task: &TaskPatch) -> Result<Task, ApiError> {
        self.client.post_json(TASKS_ENDPOINT, task).await
    }

    /// Update the given fields of task `id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline or decode error.
    pub async fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task, ApiError> {
        self.client.put_json(&task_endpoint(id), patch).await
    }

    /// Set only the completion flag of task `id`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline or decode error.
    pub async fn set_completed(&self, id: &str, completed: bool) -> Result<Task, ApiError> {
        self.update(id, &TaskPatch::completed(completed)).await
    }

    /// Delete task `id` permanently.
    ///
    /// # Errors
    ///
    /// Returns the pipeline error.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&task_endpoint(id)).await
    }
}
