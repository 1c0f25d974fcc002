//! Tasks Domain
//!
//! This module provides a complete domain implementation for managing tasks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, query parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_tasks::{SqliteTaskRepository, TaskService, sqlite};
//! use sqlx::SqlitePool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Connect and make sure the schema exists
//! let pool = SqlitePool::connect("sqlite://tasks.db").await?;
//! sqlite::init_schema(&pool).await?;
//!
//! // Create a repository and service
//! let repository = SqliteTaskRepository::new(pool);
//! let service = TaskService::new(repository);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod sqlite;

// Re-export commonly used types
pub use error::{TaskError, TaskResult};
pub use handlers::ApiDoc;
pub use models::{CreateTask, DEFAULT_LIMIT, Task, TaskFilter, TaskStatus, UpdateTask};
pub use repository::{InMemoryTaskRepository, TaskRepository};
pub use service::TaskService;
pub use sqlite::SqliteTaskRepository;
