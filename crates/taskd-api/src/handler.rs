use async_trait::async_trait;
use taskd_model::{CreateTask, Task, TaskId, UpdateTask};

use crate::error::ApiError;

/// Task CRUD API handler.
///
/// This trait abstracts the backend implementation, allowing users to:
/// - Use the provided `TaskServiceAdapter`
/// - Implement custom handlers with additional logic (auth, rate limiting, etc.)
#[async_trait]
pub trait ApiHandler: Send + Sync + 'static {
    /// Create a new task from a client payload.
    async fn create_task(&self, payload: CreateTask) -> Result<Task, ApiError>;

    /// Fetch a single task by id, `None` if absent.
    async fn get_task(&self, id: &TaskId) -> Result<Option<Task>, ApiError>;

    /// Every stored task, possibly empty.
    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    /// Partially update an existing task and return the replacement.
    async fn update_task(&self, id: &TaskId, payload: UpdateTask) -> Result<Task, ApiError>;

    /// Permanently remove a task.
    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError>;
}
