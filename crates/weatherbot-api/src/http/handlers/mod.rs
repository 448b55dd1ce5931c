//! HTTP request handlers.

pub mod logs;
