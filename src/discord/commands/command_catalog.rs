// Discord commands module.
// Each feature gets its own command file.

pub mod like;

pub mod auto_like;

pub mod settings;

// Bot presence management
pub mod presence;
