//! Log listing handlers.
//!
//! Endpoints:
//! - GET /logs?skip&limit  - Page through all logs, id ascending
//! - GET /logs/{user_id}   - All logs for one user, 404 when there are none

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use weatherbot_core::repository::log::InteractionLogRepository;
use weatherbot_types::log::InteractionLog;

use crate::http::error::AppError;
use crate::state::AppState;

/// Pagination parameters. Values reach the store unvalidated.
#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    10
}

/// GET /logs - Page through all logs.
pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<LogsQuery>,
) -> Result<Json<Vec<InteractionLog>>, AppError> {
    let logs = state.logs.list(query.skip, query.limit).await?;
    Ok(Json(logs))
}

/// GET /logs/{user_id} - All logs for one user.
pub async fn get_user_logs(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<InteractionLog>>, AppError> {
    let logs = state.logs.list_for_user(user_id).await?;
    if logs.is_empty() {
        return Err(AppError::LogsNotFound);
    }
    Ok(Json(logs))
}
