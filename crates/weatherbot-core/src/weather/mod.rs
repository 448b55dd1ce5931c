//! Weather lookup: provider port, in-memory snapshot cache and the service
//! that combines them.

pub mod cache;
pub mod provider;
pub mod service;
