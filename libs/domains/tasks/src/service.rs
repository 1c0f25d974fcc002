use chrono::Utc;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TaskError, TaskResult};
use crate::models::{CreateTask, DEFAULT_LIMIT, Task, TaskFilter, TaskStatus, UpdateTask};
use crate::repository::TaskRepository;

/// Service layer for Task business logic
///
/// Owns validation and field assignment; repositories never second-guess it.
#[derive(Clone)]
pub struct TaskService<R: TaskRepository> {
    repository: Arc<R>,
}

impl<R: TaskRepository> TaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new task with validation
    #[instrument(skip(self, input), fields(task_title = %input.title))]
    pub async fn create_task(&self, input: CreateTask) -> TaskResult<Task> {
        // Title length is the only create rule; checked before anything is written
        input.validate().map_err(|_| TaskError::TitleTooShort)?;

        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            title: input.title,
            description: input.description,
            status: TaskStatus::New,
            created_at: now,
            updated_at: now,
        };

        self.repository.create(&task).await?;
        Ok(task)
    }

    /// Get a task by ID
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn get_task(&self, id: Uuid) -> TaskResult<Task> {
        self.repository.get(id).await
    }

    /// List tasks, newest first
    pub async fn list_tasks(
        &self,
        status: Option<TaskStatus>,
        limit: i64,
        offset: i64,
    ) -> TaskResult<Vec<Task>> {
        let filter = TaskFilter {
            status,
            limit: if limit > 0 { limit } else { DEFAULT_LIMIT },
            offset,
        };

        self.repository.list(filter).await
    }

    /// Update a task, applying only the supplied fields
    #[instrument(skip(self, input), fields(task_id = %id))]
    pub async fn update_task(&self, id: Uuid, input: UpdateTask) -> TaskResult<Task> {
        // A missing task wins over any validation error
        let mut task = self.repository.get(id).await?;

        input.validate().map_err(|_| TaskError::TitleTooShort)?;
        let status = match input.status {
            Some(raw) => Some(
                raw.parse::<TaskStatus>()
                    .map_err(|_| TaskError::InvalidStatus(raw))?,
            ),
            None => None,
        };

        if let Some(title) = input.title {
            task.title = title;
        }
        if let Some(description) = input.description {
            task.description = description;
        }
        if let Some(status) = status {
            task.status = status;
        }
        task.updated_at = Utc::now();

        self.repository.update(&task).await?;
        Ok(task)
    }

    /// Delete a task
    #[instrument(skip(self), fields(task_id = %id))]
    pub async fn delete_task(&self, id: Uuid) -> TaskResult<()> {
        self.repository.delete(id).await
    }

    /// Check that the backing store is reachable
    pub async fn ping(&self) -> TaskResult<()> {
        self.repository.ping().await
    }
}
