//! Interaction log repository trait.

use weatherbot_types::error::RepositoryError;
use weatherbot_types::log::{InteractionLog, NewInteractionLog};

/// Append-only storage for interaction logs.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in weatherbot-infra.
pub trait InteractionLogRepository: Send + Sync {
    /// Insert a row, stamping it with the current time. Returns the stored row.
    fn record(
        &self,
        entry: &NewInteractionLog,
    ) -> impl std::future::Future<Output = Result<InteractionLog, RepositoryError>> + Send;

    /// Page through all rows ordered by id ascending.
    ///
    /// `skip` and `limit` are passed to the store unvalidated.
    fn list(
        &self,
        skip: i64,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<InteractionLog>, RepositoryError>> + Send;

    /// All rows for one user, ordered by id ascending. Empty if the user has none.
    fn list_for_user(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Vec<InteractionLog>, RepositoryError>> + Send;
}
