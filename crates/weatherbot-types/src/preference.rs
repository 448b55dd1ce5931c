use serde::{Deserialize, Serialize};

/// Per-user default city, keyed by the chat platform's user id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreference {
    pub user_id: i64,
    pub preferred_city: Option<String>,
}
