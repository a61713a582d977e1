use super::like_config_models::LikeConfigDocument;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait LikeConfigStore: Send + Sync {
    /// Load the full document. A missing or unreadable document is replaced
    /// by the default, which is persisted before returning.
    async fn load(&self) -> Result<LikeConfigDocument, StoreError>;

    /// Replace the persisted document. Either the old or the new document
    /// must survive a crash, never a mix of both.
    async fn save(&self, document: &LikeConfigDocument) -> Result<(), StoreError>;
}
