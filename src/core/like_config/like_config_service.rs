use super::like_config_models::{LikeConfigDocument, LikeMode, ServerConfig};
use super::like_config_store::{LikeConfigStore, StoreError};
use tokio::sync::RwLock;

/// Owns the in-memory copy of the like configuration.
///
/// The document is loaded once and every mutation rewrites it in full
/// through the store. The write lock is held until the save finishes so two
/// admins editing at once can't persist out of order.
pub struct LikeConfigService<S: LikeConfigStore> {
    store: S,
    document: RwLock<LikeConfigDocument>,
}

impl<S: LikeConfigStore> LikeConfigService<S> {
    pub async fn new(store: S) -> Result<Self, StoreError> {
        let document = store.load().await?;
        tracing::info!(servers = document.servers.len(), "Loaded like configuration");

        Ok(Self {
            store,
            document: RwLock::new(document),
        })
    }

    /// Settings for a guild. Guilds that were never configured get the
    /// default (unrestricted) settings; nothing is created here.
    pub async fn server_config(&self, guild_id: u64) -> ServerConfig {
        self.document
            .read()
            .await
            .servers
            .get(&guild_id.to_string())
            .cloned()
            .unwrap_or_default()
    }

    /// Channel gate. Direct messages (no guild) are always allowed.
    pub async fn is_channel_allowed(
        &self,
        guild_id: Option<u64>,
        channel_id: u64,
        mode: LikeMode,
    ) -> bool {
        let Some(guild_id) = guild_id else {
            return true;
        };

        self.document
            .read()
            .await
            .servers
            .get(&guild_id.to_string())
            .map(|config| config.allows_channel(mode, channel_id))
            .unwrap_or(true)
    }

    /// Add the channel to the mode's allow-list, or remove it if present.
    /// Returns whether the channel is allowed afterwards.
    pub async fn toggle_channel(
        &self,
        guild_id: u64,
        mode: LikeMode,
        channel_id: u64,
    ) -> Result<bool, StoreError> {
        let mut document = self.document.write().await;
        let allowed = document
            .servers
            .entry(guild_id.to_string())
            .or_default()
            .toggle_channel(mode, channel_id);

        self.store.save(&document).await?;
        Ok(allowed)
    }

    pub async fn set_premium_role(&self, guild_id: u64, role_id: u64) -> Result<(), StoreError> {
        let mut document = self.document.write().await;
        document
            .servers
            .entry(guild_id.to_string())
            .or_default()
            .premium_role = Some(role_id.to_string());

        self.store.save(&document).await
    }

    /// Whether any of the member's roles is the guild's premium role.
    pub async fn is_premium(&self, guild_id: Option<u64>, role_ids: &[u64]) -> bool {
        match guild_id {
            Some(guild_id) => self.server_config(guild_id).await.has_premium_role(role_ids),
            None => false,
        }
    }
}
