//! Business logic and trait definitions for Weatherbot.
//!
//! This crate defines the "ports" (repository, weather provider and chat
//! replier traits) that the infrastructure layer implements. It depends only
//! on `weatherbot-types` -- never on `weatherbot-infra` or any database/IO crate.

pub mod chat;
pub mod repository;
pub mod weather;
