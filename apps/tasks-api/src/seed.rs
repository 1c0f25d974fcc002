//! Startup seed data for an empty tasks table

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use domain_tasks::TaskStatus;
use sqlx::SqlitePool;
use tracing::{info, warn};
use uuid::Uuid;

/// Sample tasks inserted when `SEED_DATA=true` and the table is empty
const SAMPLE_TASKS: &[(&str, &str, TaskStatus)] = &[
    ("Buy groceries", "Milk, eggs, bread, and vegetables", TaskStatus::New),
    (
        "Complete project report",
        "Finish the quarterly project report and submit to manager",
        TaskStatus::InProgress,
    ),
    ("Call dentist", "Schedule annual checkup appointment", TaskStatus::New),
    ("Review code changes", "Review pull request #123 for the new feature", TaskStatus::InProgress),
    ("Update documentation", "Update API documentation with latest endpoints", TaskStatus::New),
    (
        "Fix bug in login",
        "Investigate and fix authentication issue reported by users",
        TaskStatus::InProgress,
    ),
    (
        "Plan team meeting",
        "Organize agenda and book conference room for next week",
        TaskStatus::New,
    ),
    (
        "Deploy to staging",
        "Deploy latest version to staging environment and run smoke tests",
        TaskStatus::Done,
    ),
    ("Write unit tests", "Add unit tests for the new service layer", TaskStatus::InProgress),
    ("Update dependencies", "Update crates and check for security advisories", TaskStatus::New),
    (
        "Design new feature",
        "Create mockups and technical design for user dashboard",
        TaskStatus::New,
    ),
    (
        "Optimize database queries",
        "Review and optimize slow queries in task repository",
        TaskStatus::InProgress,
    ),
    (
        "Setup CI/CD pipeline",
        "Configure GitHub Actions for automated testing and deployment",
        TaskStatus::Done,
    ),
    (
        "Refactor legacy code",
        "Refactor old authentication module to use new patterns",
        TaskStatus::New,
    ),
    (
        "Write blog post",
        "Draft blog post about Rust best practices for the company blog",
        TaskStatus::New,
    ),
    (
        "Conduct code review",
        "Review and provide feedback on 5 pending pull requests",
        TaskStatus::InProgress,
    ),
    (
        "Setup monitoring",
        "Configure Prometheus and Grafana for application metrics",
        TaskStatus::Done,
    ),
    (
        "Create API documentation",
        "Generate OpenAPI spec and publish to documentation site",
        TaskStatus::InProgress,
    ),
    ("Implement caching", "Add Redis caching layer for frequently accessed data", TaskStatus::New),
    (
        "Security audit",
        "Perform security audit and fix identified vulnerabilities",
        TaskStatus::New,
    ),
    ("Performance testing", "Run load tests and identify bottlenecks", TaskStatus::InProgress),
    ("Update README", "Update project README with latest setup instructions", TaskStatus::Done),
    ("Setup error tracking", "Integrate Sentry for error tracking and monitoring", TaskStatus::New),
    ("Create user guide", "Write comprehensive user guide for the application", TaskStatus::New),
    (
        "Backup database",
        "Create automated backup strategy for production database",
        TaskStatus::Done,
    ),
];

/// Seed the table unless it already holds tasks.
///
/// Failures are logged and swallowed; seeding is a convenience, not a
/// startup requirement.
pub async fn run(pool: &SqlitePool) {
    match task_count(pool).await {
        Ok(0) => {
            info!("Seeding database with sample tasks");
            match seed_tasks(pool).await {
                Ok(inserted) => info!(inserted, "Database seeded"),
                Err(e) => warn!(error = %e, "Failed to seed data"),
            }
        }
        Ok(count) => info!(count, "Database already contains tasks, skipping seed"),
        Err(e) => warn!(error = %e, "Failed to check existing tasks"),
    }
}

async fn task_count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM tasks")
        .fetch_one(pool)
        .await
}

/// Insert the sample set, skipping titles that already exist
async fn seed_tasks(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let now = Utc::now();
    let mut inserted = 0;

    for (i, (title, description, status)) in SAMPLE_TASKS.iter().enumerate() {
        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tasks WHERE title = ?")
            .bind(*title)
            .fetch_one(pool)
            .await?;
        if existing > 0 {
            continue;
        }

        // Spread tasks over the past few days for more realistic timestamps
        let created_at = now - Duration::hours(3 * i as i64);
        let updated_at = match status {
            TaskStatus::InProgress | TaskStatus::Done => created_at + Duration::hours(2 * i as i64),
            TaskStatus::New => created_at,
        };

        sqlx::query(
            "INSERT INTO tasks (id, title, description, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind(*title)
        .bind(*description)
        .bind(status.to_string())
        .bind(encode_timestamp(created_at))
        .bind(encode_timestamp(updated_at))
        .execute(pool)
        .await?;

        inserted += 1;
    }

    Ok(inserted)
}

fn encode_timestamp(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_tasks::sqlite::init_schema;
    use sqlx::sqlite::SqlitePoolOptions;

    // Pinned to one connection so every query sees the same in-memory database
    async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        init_schema(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_run_seeds_once() {
        let pool = memory_pool().await;

        run(&pool).await;
        let count = task_count(&pool).await.unwrap();
        assert_eq!(count, SAMPLE_TASKS.len() as i64);

        // A second run must not duplicate anything
        run(&pool).await;
        let count = task_count(&pool).await.unwrap();
        assert_eq!(count, SAMPLE_TASKS.len() as i64);
    }

    #[tokio::test]
    async fn test_seed_tasks_skips_existing_titles() {
        let pool = memory_pool().await;
        let now = encode_timestamp(Utc::now());

        sqlx::query(
            "INSERT INTO tasks (id, title, description, status, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(Uuid::new_v4().to_string())
        .bind("Buy groceries")
        .bind("Already here")
        .bind(TaskStatus::New.to_string())
        .bind(&now)
        .bind(&now)
        .execute(&pool)
        .await
        .unwrap();

        let inserted = seed_tasks(&pool).await.unwrap();

        assert_eq!(inserted, SAMPLE_TASKS.len() as u64 - 1);
        assert_eq!(task_count(&pool).await.unwrap(), SAMPLE_TASKS.len() as i64);
    }
}
