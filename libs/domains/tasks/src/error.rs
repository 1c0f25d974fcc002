use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("Task {0} not found")]
    NotFound(Uuid),

    #[error("Title must be at least 3 characters. Please check the input and try again")]
    TitleTooShort,

    #[error("Invalid status! Status can be only: `new`, `in_progress` or `done`")]
    InvalidStatus(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type TaskResult<T> = Result<T, TaskError>;

/// Convert TaskError to AppError for standardized error responses
impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        let message = err.to_string();
        match err {
            TaskError::NotFound(_) => AppError::NotFound(message),
            TaskError::TitleTooShort | TaskError::InvalidStatus(_) => AppError::BadRequest(message),
            // The stored detail is logged by AppError; clients get a generic body
            TaskError::Database(_) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<sqlx::Error> for TaskError {
    fn from(err: sqlx::Error) -> Self {
        TaskError::Database(err.to_string())
    }
}
