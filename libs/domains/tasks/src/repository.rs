use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskFilter};

/// Repository trait for Task persistence
///
/// This trait defines the data access interface for tasks.
/// Implementations can use different storage backends (SQLite, etc.)
///
/// Callers assign ids and timestamps; implementations only move rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a fully populated task
    async fn create(&self, task: &Task) -> TaskResult<()>;

    /// Get a task by ID, `NotFound` when no row matches
    async fn get(&self, id: Uuid) -> TaskResult<Task>;

    /// List tasks with optional filters, newest first
    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>>;

    /// Overwrite the mutable fields of an existing task
    async fn update(&self, task: &Task) -> TaskResult<()>;

    /// Delete a task by ID
    async fn delete(&self, id: Uuid) -> TaskResult<()>;

    /// Check that the backing store is reachable
    async fn ping(&self) -> TaskResult<()>;
}

/// In-memory implementation of TaskRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryTaskRepository {
    tasks: Arc<RwLock<HashMap<Uuid, Task>>>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn create(&self, task: &Task) -> TaskResult<()> {
        let mut tasks = self.tasks.write().await;
        tasks.insert(task.id, task.clone());

        tracing::info!(task_id = %task.id, "Created task");
        Ok(())
    }

    async fn get(&self, id: Uuid) -> TaskResult<Task> {
        let tasks = self.tasks.read().await;
        tasks.get(&id).cloned().ok_or(TaskError::NotFound(id))
    }

    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let tasks = self.tasks.read().await;

        let mut result: Vec<Task> = tasks
            .values()
            .filter(|t| match filter.status {
                Some(status) => t.status == status,
                None => true,
            })
            .cloned()
            .collect();

        // Sort by created_at descending (newest first)
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        // Apply pagination; a non-positive limit means no cap
        let result: Vec<Task> = result
            .into_iter()
            .skip(filter.offset.max(0) as usize)
            .take(if filter.limit > 0 {
                filter.limit as usize
            } else {
                usize::MAX
            })
            .collect();

        Ok(result)
    }

    async fn update(&self, task: &Task) -> TaskResult<()> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task.id) {
            Some(existing) => {
                *existing = task.clone();
                tracing::info!(task_id = %task.id, "Updated task");
                Ok(())
            }
            None => Err(TaskError::NotFound(task.id)),
        }
    }

    async fn delete(&self, id: Uuid) -> TaskResult<()> {
        let mut tasks = self.tasks.write().await;

        if tasks.remove(&id).is_some() {
            tracing::info!(task_id = %id, "Deleted task");
            Ok(())
        } else {
            Err(TaskError::NotFound(id))
        }
    }

    async fn ping(&self) -> TaskResult<()> {
        Ok(())
    }
}
