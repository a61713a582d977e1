// Like configuration models - which channels each like flow may run in,
// and which role skips the daily quota.
//
// Ids are kept as strings so the on-disk document stays readable and
// matches what admins see when they copy ids out of Discord.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The two like flows. Each has its own channel allow-list and message styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LikeMode {
    /// Manual `/like`
    Like,
    /// Automated `/auto_like send`
    AutoLike,
}

impl LikeMode {
    pub fn command_name(&self) -> &'static str {
        match self {
            LikeMode::Like => "like",
            LikeMode::AutoLike => "auto_like",
        }
    }
}

impl fmt::Display for LikeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command_name())
    }
}

/// Per-server settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Channels where `/like` is allowed. Empty = anywhere.
    #[serde(default)]
    pub like_channels: Vec<String>,
    /// Channels where `/auto_like send` is allowed. Empty = anywhere.
    #[serde(default)]
    pub auto_like_channels: Vec<String>,
    /// Role whose holders bypass the daily quota.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premium_role: Option<String>,
}

impl ServerConfig {
    pub fn channels(&self, mode: LikeMode) -> &[String] {
        match mode {
            LikeMode::Like => &self.like_channels,
            LikeMode::AutoLike => &self.auto_like_channels,
        }
    }

    fn channels_mut(&mut self, mode: LikeMode) -> &mut Vec<String> {
        match mode {
            LikeMode::Like => &mut self.like_channels,
            LikeMode::AutoLike => &mut self.auto_like_channels,
        }
    }

    /// An empty allow-list means the mode is unrestricted.
    pub fn allows_channel(&self, mode: LikeMode, channel_id: u64) -> bool {
        let channels = self.channels(mode);
        let channel_id = channel_id.to_string();
        channels.is_empty() || channels.iter().any(|c| *c == channel_id)
    }

    /// Flip membership of a channel in the mode's allow-list.
    ///
    /// Returns `true` when the channel is now allowed, `false` when it was removed.
    pub fn toggle_channel(&mut self, mode: LikeMode, channel_id: u64) -> bool {
        let channel_id = channel_id.to_string();
        let channels = self.channels_mut(mode);

        if let Some(pos) = channels.iter().position(|c| *c == channel_id) {
            channels.remove(pos);
            false
        } else {
            channels.push(channel_id);
            true
        }
    }

    pub fn premium_role_id(&self) -> Option<u64> {
        self.premium_role.as_deref().and_then(|r| r.parse().ok())
    }

    pub fn has_premium_role(&self, role_ids: &[u64]) -> bool {
        self.premium_role_id()
            .map(|premium| role_ids.contains(&premium))
            .unwrap_or(false)
    }
}

/// The whole `like_channels.json` document: `{ "servers": { "<guild_id>": ServerConfig } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeConfigDocument {
    #[serde(default)]
    pub servers: HashMap<String, ServerConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_allow_list_allows_any_channel() {
        let config = ServerConfig::default();
        assert!(config.allows_channel(LikeMode::Like, 1));
        assert!(config.allows_channel(LikeMode::AutoLike, 987654321));
    }

    #[test]
    fn non_empty_allow_list_requires_membership() {
        let config = ServerConfig {
            like_channels: vec!["10".to_string(), "20".to_string()],
            ..Default::default()
        };

        assert!(config.allows_channel(LikeMode::Like, 10));
        assert!(config.allows_channel(LikeMode::Like, 20));
        assert!(!config.allows_channel(LikeMode::Like, 30));
        // auto_like has its own (empty) list
        assert!(config.allows_channel(LikeMode::AutoLike, 30));
    }

    #[test]
    fn toggling_twice_restores_membership() {
        let mut config = ServerConfig {
            auto_like_channels: vec!["5".to_string()],
            ..Default::default()
        };
        let original = config.clone();

        assert!(!config.toggle_channel(LikeMode::AutoLike, 5));
        assert!(config.toggle_channel(LikeMode::AutoLike, 5));
        assert_eq!(config, original);

        assert!(config.toggle_channel(LikeMode::Like, 7));
        assert!(!config.toggle_channel(LikeMode::Like, 7));
        assert_eq!(config, original);
    }

    #[test]
    fn premium_role_matches_member_roles() {
        let config = ServerConfig {
            premium_role: Some("42".to_string()),
            ..Default::default()
        };

        assert!(config.has_premium_role(&[1, 42]));
        assert!(!config.has_premium_role(&[1, 2]));
        assert!(!ServerConfig::default().has_premium_role(&[42]));
    }

    #[test]
    fn document_uses_string_ids_on_disk() {
        let json = r#"{"servers": {"9": {"like_channels": ["123"], "premium_role": "77"}}}"#;
        let doc: LikeConfigDocument = serde_json::from_str(json).unwrap();

        let server = &doc.servers["9"];
        assert_eq!(server.like_channels, vec!["123".to_string()]);
        assert!(server.auto_like_channels.is_empty());
        assert_eq!(server.premium_role_id(), Some(77));

        let missing_servers: LikeConfigDocument = serde_json::from_str("{}").unwrap();
        assert!(missing_servers.servers.is_empty());
    }
}
