pub mod like_config_models;
pub mod like_config_service;
pub mod like_config_store;

pub use like_config_models::{LikeConfigDocument, LikeMode, ServerConfig};
pub use like_config_service::LikeConfigService;
pub use like_config_store::{LikeConfigStore, StoreError};
