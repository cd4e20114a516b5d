use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use taskd_core::CoreError;
use taskd_model::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("task not found: {0}")]
    TaskNotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(id) => ApiError::TaskNotFound(id.to_string()),
            CoreError::Validation(e) => ApiError::Validation(e),
        }
    }
}

/// Wire shape for error responses: `{"detail": ...}`, plus the offending
/// field name on validation errors.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, field) = match &self {
            ApiError::Validation(ValidationError::InvalidTitle { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Some("title"))
            }
            ApiError::TaskNotFound(_) => (StatusCode::NOT_FOUND, None),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        let body = ErrorBody {
            detail: self.to_string(),
            field,
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskd_model::TaskId;

    #[test]
    fn core_not_found_maps_to_task_not_found() {
        let err: ApiError = CoreError::NotFound(TaskId::from("task-1")).into();
        assert!(matches!(err, ApiError::TaskNotFound(id) if id == "task-1"));
    }

    #[test]
    fn status_codes() {
        let resp = ApiError::TaskNotFound("x".into()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::Validation(ValidationError::InvalidTitle { len: 0 }).into_response();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let resp = ApiError::Internal("boom".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
