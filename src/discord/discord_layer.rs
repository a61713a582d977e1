// Discord layer - commands and reply helpers.

#[path = "commands/command_catalog.rs"]
pub mod commands;

#[path = "like/formatter.rs"]
pub mod formatter;

#[path = "like/reply.rs"]
pub mod reply;

// Re-export command types for convenience
pub use commands::like::{Context, Data, Error};
