//! Read-only HTTP API over the interaction logs.
//!
//! Plain JSON bodies; errors use `{"detail": ...}`.

pub mod error;
pub mod handlers;
pub mod router;
