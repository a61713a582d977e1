use crate::core::like_config::StoreError;
use crate::core::quota::{DailyUsageRecord, UsageStore};
use crate::infra::json_file::write_atomic;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// JSON-backed daily usage, persisted as a single map:
/// { user_id: { "last_reset": "YYYY-MM-DD", "used": n } }
pub struct JsonUsageStore {
    path: PathBuf,
    cache: RwLock<HashMap<String, DailyUsageRecord>>,
}

impl JsonUsageStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let cache = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_else(|e| {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Daily usage file is corrupt, starting with empty usage"
                );
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };

        Self {
            path,
            cache: RwLock::new(cache),
        }
    }
}

#[async_trait]
impl UsageStore for JsonUsageStore {
    async fn get_usage(&self, user_id: u64) -> Result<Option<DailyUsageRecord>, StoreError> {
        let cache = self.cache.read().await;
        Ok(cache.get(&user_id.to_string()).copied())
    }

    async fn save_usage(&self, user_id: u64, record: DailyUsageRecord) -> Result<(), StoreError> {
        // Held across the write: writers share one staging file
        let mut cache = self.cache.write().await;

        let mut updated = cache.clone();
        updated.insert(user_id.to_string(), record);
        write_atomic(&self.path, &updated).await?;

        // Only a persisted record counts as used
        *cache = updated;
        Ok(())
    }
}
