// Core like module - the gate chain and the API port.

pub mod like_gates;
pub mod like_models;
pub mod like_service;

pub use like_gates::CooldownTracker;
pub use like_models::*;
pub use like_service::{LikeApi, LikeError, LikeService};
