//! SQLite preference repository.

use sqlx::Row;
use weatherbot_core::repository::preference::PreferenceRepository;
use weatherbot_types::error::RepositoryError;
use weatherbot_types::preference::UserPreference;

use super::pool::{DatabasePool, repository_error};

/// SQLite-backed implementation of `PreferenceRepository` over `user_settings`.
#[derive(Clone)]
pub struct SqlitePreferenceRepository {
    pool: DatabasePool,
}

impl SqlitePreferenceRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

impl PreferenceRepository for SqlitePreferenceRepository {
    async fn get(&self, user_id: i64) -> Result<Option<UserPreference>, RepositoryError> {
        let row = sqlx::query("SELECT user_id, preferred_city FROM user_settings WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(repository_error)?;

        match row {
            Some(row) => {
                let preferred_city: Option<String> = row
                    .try_get("preferred_city")
                    .map_err(repository_error)?;
                Ok(Some(UserPreference {
                    user_id,
                    preferred_city,
                }))
            }
            None => Ok(None),
        }
    }

    async fn set_city(&self, user_id: i64, city: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO user_settings (user_id, preferred_city)
               VALUES (?, ?)
               ON CONFLICT (user_id) DO UPDATE SET preferred_city = excluded.preferred_city"#,
        )
        .bind(user_id)
        .bind(city)
        .execute(&self.pool.writer)
        .await
        .map_err(repository_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sqlite::pool::test_support::test_pool;

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let (pool, _dir) = test_pool().await;
        let repo = SqlitePreferenceRepository::new(pool);
        assert!(repo.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let (pool, _dir) = test_pool().await;
        let repo = SqlitePreferenceRepository::new(pool);
        repo.set_city(42, "Berlin").await.unwrap();

        let pref = repo.get(42).await.unwrap().unwrap();
        assert_eq!(pref.user_id, 42);
        assert_eq!(pref.preferred_city.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    async fn test_set_upserts_single_row() {
        let (pool, _dir) = test_pool().await;
        let repo = SqlitePreferenceRepository::new(pool.clone());

        repo.set_city(42, "Berlin").await.unwrap();
        repo.set_city(42, "Munich").await.unwrap();

        let rows: Vec<(i64, Option<String>)> =
            sqlx::query_as("SELECT user_id, preferred_city FROM user_settings")
                .fetch_all(&pool.reader)
                .await
                .unwrap();
        assert_eq!(rows, vec![(42, Some("Munich".to_string()))]);
    }

    #[tokio::test]
    async fn test_null_city_is_reported_as_none() {
        let (pool, _dir) = test_pool().await;
        sqlx::query("INSERT INTO user_settings (user_id) VALUES (7)")
            .execute(&pool.writer)
            .await
            .unwrap();

        let repo = SqlitePreferenceRepository::new(pool);
        let pref = repo.get(7).await.unwrap().unwrap();
        assert_eq!(pref.preferred_city, None);
    }

    #[tokio::test]
    async fn test_users_are_isolated() {
        let (pool, _dir) = test_pool().await;
        let repo = SqlitePreferenceRepository::new(pool);
        repo.set_city(1, "Paris").await.unwrap();
        repo.set_city(2, "Rome").await.unwrap();

        assert_eq!(
            repo.get(1).await.unwrap().unwrap().preferred_city.as_deref(),
            Some("Paris")
        );
        assert_eq!(
            repo.get(2).await.unwrap().unwrap().preferred_city.as_deref(),
            Some("Rome")
        );
    }
}
