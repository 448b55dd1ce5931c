//! SQLite interaction log repository.
//!
//! Implements `InteractionLogRepository` from `weatherbot-core`. Timestamps
//! are stored as RFC 3339 text and every listing is ordered by `id`.

use chrono::{DateTime, Utc};
use sqlx::Row;
use weatherbot_core::repository::log::InteractionLogRepository;
use weatherbot_types::error::RepositoryError;
use weatherbot_types::log::{InteractionLog, NewInteractionLog};

use super::pool::{DatabasePool, repository_error};

/// SQLite-backed implementation of `InteractionLogRepository`.
#[derive(Clone)]
pub struct SqliteInteractionLogRepository {
    pool: DatabasePool,
}

impl SqliteInteractionLogRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

struct LogRow {
    id: i64,
    user_id: i64,
    command: String,
    response: String,
    timestamp: String,
}

impl LogRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            command: row.try_get("command")?,
            response: row.try_get("response")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_log(self) -> Result<InteractionLog, RepositoryError> {
        Ok(InteractionLog {
            id: self.id,
            user_id: self.user_id,
            command: self.command,
            response: self.response,
            timestamp: parse_datetime(&self.timestamp)?,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn rows_to_logs(rows: &[sqlx::sqlite::SqliteRow]) -> Result<Vec<InteractionLog>, RepositoryError> {
    rows.iter()
        .map(|row| {
            LogRow::from_row(row)
                .map_err(repository_error)?
                .into_log()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// InteractionLogRepository implementation
// ---------------------------------------------------------------------------

impl InteractionLogRepository for SqliteInteractionLogRepository {
    async fn record(&self, entry: &NewInteractionLog) -> Result<InteractionLog, RepositoryError> {
        let timestamp = Utc::now();

        let result = sqlx::query(
            "INSERT INTO logs (user_id, command, timestamp, response) VALUES (?, ?, ?, ?)",
        )
        .bind(entry.user_id)
        .bind(&entry.command)
        .bind(timestamp.to_rfc3339())
        .bind(&entry.response)
        .execute(&self.pool.writer)
        .await
        .map_err(repository_error)?;

        Ok(InteractionLog {
            id: result.last_insert_rowid(),
            user_id: entry.user_id,
            command: entry.command.clone(),
            response: entry.response.clone(),
            timestamp,
        })
    }

    async fn list(&self, skip: i64, limit: i64) -> Result<Vec<InteractionLog>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM logs ORDER BY id ASC LIMIT ? OFFSET ?")
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(repository_error)?;

        rows_to_logs(&rows)
    }

    async fn list_for_user(&self, user_id: i64) -> Result<Vec<InteractionLog>, RepositoryError> {
        let rows = sqlx::query("SELECT * FROM logs WHERE user_id = ? ORDER BY id ASC")
            .bind(user_id)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(repository_error)?;

        rows_to_logs(&rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_support::test_pool;

    fn entry(user_id: i64, command: &str) -> NewInteractionLog {
        NewInteractionLog {
            user_id,
            command: command.to_string(),
            response: format!("reply to {command}"),
        }
    }

    #[tokio::test]
    async fn test_record_assigns_id_and_timestamp() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteInteractionLogRepository::new(pool);
        let before = Utc::now();

        let first = repo.record(&entry(1, "/weather Paris")).await.unwrap();
        let second = repo.record(&entry(1, "/weather Oslo")).await.unwrap();

        assert!(second.id > first.id);
        assert!(first.timestamp >= before);
        assert_eq!(first.response, "reply to /weather Paris");
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteInteractionLogRepository::new(pool);
        let logs = repo.list(0, 10).await.unwrap();
        assert!(logs.is_empty());
    }

    #[tokio::test]
    async fn test_list_paginates_in_id_order() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteInteractionLogRepository::new(pool);
        for i in 0..5 {
            repo.record(&entry(i, &format!("/weather c{i}"))).await.unwrap();
        }

        let page = repo.list(1, 2).await.unwrap();
        let commands: Vec<&str> = page.iter().map(|l| l.command.as_str()).collect();
        assert_eq!(commands, vec!["/weather c1", "/weather c2"]);

        let all = repo.list(0, 10).await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[tokio::test]
    async fn test_list_passes_negative_bounds_through() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteInteractionLogRepository::new(pool);
        for i in 0..3 {
            repo.record(&entry(i, "/weather Paris")).await.unwrap();
        }

        // SQLite: negative LIMIT means unbounded, negative OFFSET means zero.
        let logs = repo.list(-5, -1).await.unwrap();
        assert_eq!(logs.len(), 3);
    }

    #[tokio::test]
    async fn test_list_for_user_filters() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteInteractionLogRepository::new(pool);
        repo.record(&entry(1, "/weather Paris")).await.unwrap();
        repo.record(&entry(2, "/weather Rome")).await.unwrap();
        repo.record(&entry(1, "/weather Oslo")).await.unwrap();

        let logs = repo.list_for_user(1).await.unwrap();
        assert_eq!(logs.len(), 2);
        assert!(logs.iter().all(|l| l.user_id == 1));
        assert_eq!(logs[0].command, "/weather Paris");
        assert_eq!(logs[1].command, "/weather Oslo");

        assert!(repo.list_for_user(3).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_roundtrip_preserves_timestamp() {
        let (pool, _dir) = test_pool().await;
        let repo = SqliteInteractionLogRepository::new(pool);
        let stored = repo.record(&entry(4, "/weather Kyiv")).await.unwrap();

        let listed = repo.list_for_user(4).await.unwrap();
        assert_eq!(listed, vec![stored]);
    }

    #[tokio::test]
    async fn test_closed_pool_is_connection_error() {
        let (pool, _dir) = test_pool().await;
        pool.writer.close().await;
        let repo = SqliteInteractionLogRepository::new(pool);

        let err = repo.record(&entry(1, "/weather Paris")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Connection));
    }
}
