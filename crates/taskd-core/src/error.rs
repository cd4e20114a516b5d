use taskd_model::{TaskId, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("task not found: {0}")]
    NotFound(TaskId),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
