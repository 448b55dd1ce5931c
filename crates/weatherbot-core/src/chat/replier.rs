use weatherbot_types::error::ChatError;

/// An incoming chat message, reduced to what the dispatcher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub user_id: i64,
    /// Display name, for logging only.
    pub user_name: String,
    /// Raw message text, stored verbatim in interaction logs.
    pub text: String,
}

/// Sends a text reply back to the chat the message came from.
pub trait ChatReplier: Send + Sync {
    fn reply(&self, text: &str) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;
}
