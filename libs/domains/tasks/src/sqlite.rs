use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{Connection, SqlitePool};
use uuid::Uuid;

use crate::error::{TaskError, TaskResult};
use crate::models::{Task, TaskFilter};
use crate::repository::TaskRepository;

/// Create the tasks table when it does not exist yet. The only schema
/// management in scope; anything beyond the initial shape is out.
pub async fn init_schema(pool: &SqlitePool) -> TaskResult<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS tasks (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            status TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Stored row shape. Every column is TEXT; decoding into domain types is
/// explicit so a corrupt row surfaces as a `Database` error, not a panic.
#[derive(Debug, Clone, sqlx::FromRow)]
struct TaskRow {
    id: String,
    title: String,
    description: String,
    status: String,
    created_at: String,
    updated_at: String,
}

impl TaskRow {
    fn into_task(self) -> TaskResult<Task> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| TaskError::Database(format!("parse id: {e}")))?;
        let status = self
            .status
            .parse()
            .map_err(|_| TaskError::Database(format!("unknown status `{}`", self.status)))?;

        Ok(Task {
            id,
            title: self.title,
            description: self.description,
            status,
            created_at: parse_timestamp(&self.created_at, "created_at")?,
            updated_at: parse_timestamp(&self.updated_at, "updated_at")?,
        })
    }
}

fn parse_timestamp(value: &str, column: &str) -> TaskResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| TaskError::Database(format!("parse {column}: {e}")))
}

/// RFC3339 with a fixed nine-digit fraction and `Z` suffix, so the stored
/// strings sort lexically in chronological order.
fn encode_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// SQLite implementation of TaskRepository
#[derive(Clone)]
pub struct SqliteTaskRepository {
    pool: SqlitePool,
}

impl SqliteTaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskRepository for SqliteTaskRepository {
    async fn create(&self, task: &Task) -> TaskResult<()> {
        sqlx::query(
            "INSERT INTO tasks (id, title, description, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(task.id.to_string())
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.to_string())
        .bind(encode_timestamp(task.created_at))
        .bind(encode_timestamp(task.updated_at))
        .execute(&self.pool)
        .await?;

        tracing::info!(task_id = %task.id, "Created task");
        Ok(())
    }

    async fn get(&self, id: Uuid) -> TaskResult<Task> {
        let row: Option<TaskRow> = sqlx::query_as(
            "SELECT id, title, description, status, created_at, updated_at
             FROM tasks WHERE id = ?",
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or(TaskError::NotFound(id))?.into_task()
    }

    async fn list(&self, filter: TaskFilter) -> TaskResult<Vec<Task>> {
        let mut sql = String::from(
            "SELECT id, title, description, status, created_at, updated_at FROM tasks",
        );
        if filter.status.is_some() {
            sql.push_str(" WHERE status = ?");
        }
        sql.push_str(" ORDER BY created_at DESC");
        if filter.limit > 0 {
            sql.push_str(" LIMIT ?");
        } else if filter.offset > 0 {
            // SQLite only accepts OFFSET after a LIMIT clause; -1 means no cap
            sql.push_str(" LIMIT -1");
        }
        if filter.offset > 0 {
            sql.push_str(" OFFSET ?");
        }

        let mut query = sqlx::query_as::<_, TaskRow>(&sql);
        if let Some(status) = filter.status {
            query = query.bind(status.to_string());
        }
        if filter.limit > 0 {
            query = query.bind(filter.limit);
        }
        if filter.offset > 0 {
            query = query.bind(filter.offset);
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(TaskRow::into_task).collect()
    }

    async fn update(&self, task: &Task) -> TaskResult<()> {
        let result = sqlx::query(
            "UPDATE tasks SET title = ?, description = ?, status = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status.to_string())
        .bind(encode_timestamp(task.updated_at))
        .bind(task.id.to_string())
        .execute(&self.pool)
        .await?;

        // Affected-row count doubles as the existence check, no pre-read
        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(task.id));
        }

        tracing::info!(task_id = %task.id, "Updated task");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> TaskResult<()> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(TaskError::NotFound(id));
        }

        tracing::info!(task_id = %id, "Deleted task");
        Ok(())
    }

    async fn ping(&self) -> TaskResult<()> {
        let mut conn = self.pool.acquire().await?;
        conn.ping().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;
    use chrono::Duration;
    use sqlx::sqlite::SqlitePoolOptions;

    // A single pooled connection keeps the in-memory database alive for the
    // whole test; extra connections would each get their own empty database.
    async fn memory_repo() -> SqliteTaskRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        SqliteTaskRepository::new(pool)
    }

    fn sample_task(title: &str, status: TaskStatus, age_hours: i64) -> Task {
        let created_at = Utc::now() - Duration::hours(age_hours);
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "details".to_string(),
            status,
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrips_all_fields() {
        let repo = memory_repo().await;
        let task = sample_task("Write report", TaskStatus::InProgress, 1);

        repo.create(&task).await.unwrap();

        let fetched = repo.get(task.id).await.unwrap();
        assert_eq!(fetched.id, task.id);
        assert_eq!(fetched.title, task.title);
        assert_eq!(fetched.description, task.description);
        assert_eq!(fetched.status, task.status);
        assert_eq!(fetched.created_at, task.created_at);
        assert_eq!(fetched.updated_at, task.updated_at);
    }

    #[tokio::test]
    async fn test_get_missing_task_is_not_found() {
        let repo = memory_repo().await;
        let id = Uuid::new_v4();

        let result = repo.get(id).await;
        assert!(matches!(result, Err(TaskError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_overwrites_mutable_fields() {
        let repo = memory_repo().await;
        let mut task = sample_task("Initial", TaskStatus::New, 2);
        repo.create(&task).await.unwrap();

        task.title = "Revised".to_string();
        task.status = TaskStatus::Done;
        task.updated_at = Utc::now();
        repo.update(&task).await.unwrap();

        let fetched = repo.get(task.id).await.unwrap();
        assert_eq!(fetched.title, "Revised");
        assert_eq!(fetched.status, TaskStatus::Done);
        assert_eq!(fetched.created_at, task.created_at);
        assert!(fetched.updated_at > fetched.created_at);
    }

    #[tokio::test]
    async fn test_update_missing_task_is_not_found() {
        let repo = memory_repo().await;
        let task = sample_task("Ghost", TaskStatus::New, 0);

        let result = repo.update(&task).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_twice_reports_not_found() {
        let repo = memory_repo().await;
        let task = sample_task("Temporary", TaskStatus::New, 0);
        repo.create(&task).await.unwrap();

        repo.delete(task.id).await.unwrap();

        let result = repo.delete(task.id).await;
        assert!(matches!(result, Err(TaskError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_orders_newest_first_and_filters_by_status() {
        let repo = memory_repo().await;
        repo.create(&sample_task("Oldest", TaskStatus::Done, 3))
            .await
            .unwrap();
        repo.create(&sample_task("Middle", TaskStatus::New, 2))
            .await
            .unwrap();
        repo.create(&sample_task("Newest", TaskStatus::New, 1))
            .await
            .unwrap();

        let all = repo.list(TaskFilter::default()).await.unwrap();
        let titles: Vec<&str> = all.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Newest", "Middle", "Oldest"]);

        let done = repo
            .list(TaskFilter {
                status: Some(TaskStatus::Done),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "Oldest");
    }

    #[tokio::test]
    async fn test_list_applies_limit_and_offset() {
        let repo = memory_repo().await;
        for age in 1..=5 {
            repo.create(&sample_task(&format!("Task {age}"), TaskStatus::New, age))
                .await
                .unwrap();
        }

        let page = repo
            .list(TaskFilter {
                status: None,
                limit: 2,
                offset: 1,
            })
            .await
            .unwrap();
        let titles: Vec<&str> = page.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Task 2", "Task 3"]);

        // Offset without a positive limit still skips rows
        let rest = repo
            .list(TaskFilter {
                status: None,
                limit: 0,
                offset: 3,
            })
            .await
            .unwrap();
        assert_eq!(rest.len(), 2);
    }

    #[tokio::test]
    async fn test_list_on_empty_table_returns_empty_vec() {
        let repo = memory_repo().await;

        let tasks = repo.list(TaskFilter::default()).await.unwrap();
        assert!(tasks.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_timestamp_surfaces_as_database_error() {
        let repo = memory_repo().await;
        let task = sample_task("Corrupted", TaskStatus::New, 0);
        repo.create(&task).await.unwrap();

        sqlx::query("UPDATE tasks SET created_at = 'yesterday-ish' WHERE id = ?")
            .bind(task.id.to_string())
            .execute(&repo.pool)
            .await
            .unwrap();

        let result = repo.get(task.id).await;
        assert!(matches!(result, Err(TaskError::Database(_))));
    }

    #[tokio::test]
    async fn test_unknown_stored_status_surfaces_as_database_error() {
        let repo = memory_repo().await;
        let task = sample_task("Odd status", TaskStatus::New, 0);
        repo.create(&task).await.unwrap();

        sqlx::query("UPDATE tasks SET status = 'archived' WHERE id = ?")
            .bind(task.id.to_string())
            .execute(&repo.pool)
            .await
            .unwrap();

        let result = repo.get(task.id).await;
        assert!(matches!(result, Err(TaskError::Database(_))));
    }

    #[tokio::test]
    async fn test_ping_succeeds_on_live_pool() {
        let repo = memory_repo().await;
        assert!(repo.ping().await.is_ok());
    }

    #[test]
    fn test_encoded_timestamps_sort_lexically() {
        let earlier = Utc::now();
        let later = earlier + Duration::nanoseconds(1);

        assert!(encode_timestamp(earlier) < encode_timestamp(later));
        assert_eq!(encode_timestamp(earlier).len(), encode_timestamp(later).len());
    }
}
