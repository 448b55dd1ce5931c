//! Chat command handling.
//!
//! Parses incoming message text into a [`command::ChatCommand`] and runs it
//! against the preference and log repositories and the weather service.
//! Replies go out through a [`replier::ChatReplier`], so nothing here knows
//! about a particular chat platform.

pub mod command;
pub mod dispatcher;
pub mod replier;
pub mod replies;
