// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "like_config/mod.rs"]
pub mod like_config;

#[path = "quota/quota_service.rs"]
pub mod quota;

#[path = "likes/mod.rs"]
pub mod likes;
