//! Shared state for the HTTP API, pinned to the SQLite implementation.

use std::sync::Arc;

use weatherbot_infra::sqlite::log::SqliteInteractionLogRepository;
use weatherbot_infra::sqlite::pool::DatabasePool;

#[derive(Clone)]
pub struct AppState {
    pub logs: Arc<SqliteInteractionLogRepository>,
}

impl AppState {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            logs: Arc::new(SqliteInteractionLogRepository::new(pool)),
        }
    }
}
