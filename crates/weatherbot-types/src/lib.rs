//! Shared domain types for Weatherbot.
//!
//! Interaction logs, user preferences, weather snapshots, configuration
//! and the error enums used across the workspace.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod config;
pub mod error;
pub mod log;
pub mod preference;
pub mod weather;
