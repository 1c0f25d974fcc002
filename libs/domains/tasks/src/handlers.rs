use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    AppError, JsonInput, UuidPath,
    errors::{ErrorResponse, handlers::method_not_allowed, messages},
};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi};

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, DEFAULT_LIMIT, Task, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;
use crate::service::TaskService;

const TAG: &str = "tasks";

/// OpenAPI documentation for Tasks API
#[derive(OpenApi)]
#[openapi(
    paths(list_tasks, create_task, get_task, update_task, delete_task),
    components(schemas(Task, TaskStatus, CreateTask, UpdateTask, ErrorResponse)),
    tags(
        (name = TAG, description = "Task management endpoints")
    )
)]
pub struct ApiDoc;

/// Query parameters accepted by the list endpoint.
///
/// Values arrive as raw strings so the handler can answer with the fixed
/// per-parameter message instead of a serde rejection; empty values are
/// treated as absent.
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListTasksQuery {
    /// Status filter: `new`, `in_progress` or `done`
    pub status: Option<String>,
    /// Page size, integer > 0 (default 50)
    pub limit: Option<String>,
    /// Rows to skip, integer >= 0 (default 0)
    pub offset: Option<String>,
}

/// Create the task router with all HTTP endpoints
pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_tasks).post(create_task))
        .route("/{id}", get(get_task).put(update_task).delete(delete_task))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(shared_service)
}

/// List tasks with optional status filter and pagination
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(ListTasksQuery),
    responses(
        (status = 200, description = "List of tasks, newest first", body = Vec<Task>),
        (status = 400, description = "Invalid status, limit or offset", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn list_tasks<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    Query(query): Query<ListTasksQuery>,
) -> Result<Json<Vec<Task>>, AppError> {
    let status = match query.status.filter(|raw| !raw.is_empty()) {
        Some(raw) => Some(
            raw.parse::<TaskStatus>()
                .map_err(|_| TaskError::InvalidStatus(raw))?,
        ),
        None => None,
    };

    let limit = match query.limit.filter(|raw| !raw.is_empty()) {
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or_else(|| AppError::BadRequest(messages::INVALID_LIMIT.to_string()))?,
        None => DEFAULT_LIMIT,
    };

    let offset = match query.offset.filter(|raw| !raw.is_empty()) {
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|offset| *offset >= 0)
            .ok_or_else(|| AppError::BadRequest(messages::INVALID_OFFSET.to_string()))?,
        None => 0,
    };

    let tasks = service.list_tasks(status, limit, offset).await?;
    Ok(Json(tasks))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateTask,
    responses(
        (status = 201, description = "Task created successfully", body = Task),
        (status = 400, description = "Malformed body or title too short", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn create_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    JsonInput(input): JsonInput<CreateTask>,
) -> TaskResult<impl IntoResponse> {
    let task = service.create_task(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = Task),
        (status = 400, description = "Invalid task ID", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn get_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<Json<Task>> {
    let task = service.get_task(id).await?;
    Ok(Json(task))
}

/// Update a task, changing only the supplied fields
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    request_body = UpdateTask,
    responses(
        (status = 200, description = "Task updated successfully", body = Task),
        (status = 400, description = "Invalid body, title or status", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn update_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
    JsonInput(input): JsonInput<UpdateTask>,
) -> TaskResult<Json<Task>> {
    let task = service.update_task(id, input).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = Uuid, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 400, description = "Invalid task ID", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
async fn delete_task<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
    UuidPath(id): UuidPath,
) -> TaskResult<impl IntoResponse> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
