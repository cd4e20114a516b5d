use std::sync::Arc;

use async_trait::async_trait;
use taskd_core::TaskService;
use taskd_model::{CreateTask, Task, TaskId, UpdateTask};

use crate::error::ApiError;
use crate::handler::ApiHandler;

/// Adapter that bridges `TaskService` to `ApiHandler`.
///
/// This is a ready-to-use implementation that directly delegates to the
/// in-memory service.
pub struct TaskServiceAdapter {
    service: Arc<TaskService>,
}

impl TaskServiceAdapter {
    /// Create a new adapter wrapping the given service.
    pub fn new(service: Arc<TaskService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ApiHandler for TaskServiceAdapter {
    async fn create_task(&self, payload: CreateTask) -> Result<Task, ApiError> {
        self.service.create(payload).map_err(ApiError::from)
    }

    async fn get_task(&self, id: &TaskId) -> Result<Option<Task>, ApiError> {
        Ok(self.service.get(id))
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        Ok(self.service.list())
    }

    async fn update_task(&self, id: &TaskId, payload: UpdateTask) -> Result<Task, ApiError> {
        self.service.update(id, payload).map_err(ApiError::from)
    }

    async fn delete_task(&self, id: &TaskId) -> Result<(), ApiError> {
        self.service.delete(id).map_err(ApiError::from)
    }
}
