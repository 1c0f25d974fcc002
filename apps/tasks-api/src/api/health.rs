//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use axum_helpers::errors::handlers::method_not_allowed;
use axum_helpers::{errors::messages, AppError};
use domain_tasks::{TaskRepository, TaskService};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize)]
struct HealthResponse {
    status: String,
}

/// Ping the store; unreachable storage turns into a 503
async fn health<R: TaskRepository>(
    State(service): State<Arc<TaskService<R>>>,
) -> Result<Json<HealthResponse>, AppError> {
    service.ping().await.map_err(|e| {
        warn!(error = %e, "Health check failed");
        AppError::ServiceUnavailable(messages::UNHEALTHY.to_string())
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
    }))
}

pub fn router<R: TaskRepository + 'static>(service: TaskService<R>) -> Router {
    Router::new()
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(Arc::new(service))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use domain_tasks::SqliteTaskRepository;
    use http_body_util::BodyExt;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use tower::ServiceExt;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    fn get_health() -> Request<Body> {
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let pool = memory_pool().await;
        let app = router(TaskService::new(SqliteTaskRepository::new(pool)));

        let response = app.oneshot(get_health()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_health_reports_unavailable_when_store_is_down() {
        let pool = memory_pool().await;
        let app = router(TaskService::new(SqliteTaskRepository::new(pool.clone())));
        pool.close().await;

        let response = app.oneshot(get_health()).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Server is not available");
        assert_eq!(json["error"], "SERVICE_UNAVAILABLE");
    }

    #[tokio::test]
    async fn test_health_rejects_wrong_method() {
        let pool = memory_pool().await;
        let app = router(TaskService::new(SqliteTaskRepository::new(pool)));

        let request = Request::builder()
            .method("POST")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
