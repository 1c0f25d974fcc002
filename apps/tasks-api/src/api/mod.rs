//! API routes module

pub mod health;

use axum::Router;
use domain_tasks::{handlers, TaskRepository, TaskService};

/// Create all API routes
pub fn routes<R: TaskRepository + Clone + 'static>(service: TaskService<R>) -> Router {
    Router::new()
        .nest("/tasks", handlers::router(service.clone()))
        .merge(health::router(service))
}
