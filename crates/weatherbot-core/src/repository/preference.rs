use weatherbot_types::error::RepositoryError;
use weatherbot_types::preference::UserPreference;

/// Per-user preferred city storage.
pub trait PreferenceRepository: Send + Sync {
    /// Get a user's preference row. Returns None if the user never set one.
    fn get(
        &self,
        user_id: i64,
    ) -> impl std::future::Future<Output = Result<Option<UserPreference>, RepositoryError>> + Send;

    /// Set the preferred city (upsert keyed by user id).
    fn set_city(
        &self,
        user_id: i64,
        city: &str,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;
}
