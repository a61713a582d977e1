use crate::core::like_config::{LikeConfigDocument, LikeConfigStore, StoreError};
use crate::infra::json_file::{read_json, write_atomic};
use async_trait::async_trait;
use std::path::PathBuf;

/// File-backed store for `like_channels.json`.
///
/// A missing, empty or corrupt file is replaced with an empty document on
/// load, so the bot always starts with a valid config on disk.
pub struct JsonLikeConfigStore {
    path: PathBuf,
}

impl JsonLikeConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LikeConfigStore for JsonLikeConfigStore {
    async fn load(&self) -> Result<LikeConfigDocument, StoreError> {
        match read_json::<LikeConfigDocument>(&self.path).await {
            Ok(Some(document)) => return Ok(document),
            Ok(None) => {
                tracing::info!(path = %self.path.display(), "No like config found, creating one");
            }
            Err(StoreError::Serialization(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Like config is corrupt or empty, resetting to default"
                );
            }
            Err(e) => return Err(e),
        }

        let document = LikeConfigDocument::default();
        self.save(&document).await?;
        Ok(document)
    }

    async fn save(&self, document: &LikeConfigDocument) -> Result<(), StoreError> {
        write_atomic(&self.path, document).await
    }
}
