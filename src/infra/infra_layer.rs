// The infra module contains implementations of core traits.
// Each feature implementation goes in its own submodule.

#[path = "json_file.rs"]
pub mod json_file;

#[path = "like_config/json_store.rs"]
pub mod like_config;

#[path = "quota/json_usage_store.rs"]
pub mod quota;

#[path = "like_api/like_api_client.rs"]
pub mod like_api;
