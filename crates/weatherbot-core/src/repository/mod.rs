//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure layer
//! (weatherbot-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod log;
pub mod preference;
