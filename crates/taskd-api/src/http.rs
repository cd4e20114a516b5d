use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, patch, post},
};
use taskd_model::{CreateTask, TaskId, UpdateTask};
use tracing::debug;

use crate::{error::ApiError, handler::ApiHandler};

/// HTTP API service builder.
pub struct HttpApi<H> {
    handler: Arc<H>,
}

impl<H> HttpApi<H>
where
    H: ApiHandler,
{
    /// Create new HTTP API with the given handler.
    pub fn new(handler: Arc<H>) -> Self {
        Self { handler }
    }

    /// Build axum router with mounted endpoints.
    ///
    /// Routes:
    /// - POST /tasks - Create task
    /// - GET /tasks - List all tasks
    /// - GET /tasks/:id - Get task
    /// - PATCH /tasks/:id - Partially update task
    /// - DELETE /tasks/:id - Delete task
    pub fn router(self) -> Router {
        Router::new()
            .route("/tasks", post(create_task::<H>))
            .route("/tasks", get(list_tasks::<H>))
            .route("/tasks/{id}", get(get_task::<H>))
            .route("/tasks/{id}", patch(update_task::<H>))
            .route("/tasks/{id}", delete(delete_task::<H>))
            .with_state(self.handler)
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /tasks
async fn create_task<H>(
    State(handler): State<Arc<H>>,
    Json(payload): Json<CreateTask>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let task = handler.create_task(payload).await?;
    debug!(id = %task.id, "task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/:id
async fn get_task<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let task_id = TaskId::from(id);
    debug!(%task_id, "getting task");

    let task = handler
        .get_task(&task_id)
        .await?
        .ok_or_else(|| ApiError::TaskNotFound(task_id.to_string()))?;

    Ok(Json(task))
}

/// GET /tasks
async fn list_tasks<H>(State(handler): State<Arc<H>>) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let tasks = handler.list_tasks().await?;
    debug!(count = tasks.len(), "tasks listed");

    Ok(Json(tasks))
}

/// PATCH /tasks/:id
async fn update_task<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateTask>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let task_id = TaskId::from(id);
    debug!(%task_id, "updating task");

    let task = handler.update_task(&task_id, payload).await?;

    Ok(Json(task))
}

/// DELETE /tasks/:id
async fn delete_task<H>(
    State(handler): State<Arc<H>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    H: ApiHandler,
{
    let task_id = TaskId::from(id);
    handler.delete_task(&task_id).await?;
    debug!(%task_id, "task deleted");

    Ok(StatusCode::NO_CONTENT)
}
