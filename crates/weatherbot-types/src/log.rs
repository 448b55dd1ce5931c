//! Interaction log records.
//!
//! One row per successful weather lookup: the raw command text the user
//! sent and the reply the bot produced. Rows are append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted interaction log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionLog {
    pub id: i64,
    pub user_id: i64,
    pub command: String,
    pub response: String,
    /// Capture time, assigned by the repository on insert.
    pub timestamp: DateTime<Utc>,
}

/// Insert payload for a new interaction log row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewInteractionLog {
    pub user_id: i64,
    pub command: String,
    pub response: String,
}
