// Startup configuration, read from the environment (and `.env` via dotenv).

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use std::time::Duration;

pub struct BotConfig {
    pub discord_token: String,
    /// Base host of the like API, without a trailing slash.
    pub api_url: String,
    pub command_prefix: String,
    pub daily_limit_enabled: bool,
    pub api_timeout: Option<Duration>,
    pub data_dir: PathBuf,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let discord_token = non_blank(&lookup, "DISCORD_TOKEN").context(
            "Missing DISCORD_TOKEN environment variable! Create a .env file with your bot token.",
        )?;
        let api_url = non_blank(&lookup, "API_URL")
            .context("Missing API_URL environment variable! Point it at the like API host.")?;

        let command_prefix = non_blank(&lookup, "COMMAND_PREFIX").unwrap_or_else(|| "!".to_string());

        let daily_limit_enabled = match non_blank(&lookup, "DAILY_LIMIT_ENABLED") {
            Some(value) => value
                .trim()
                .to_ascii_lowercase()
                .parse::<bool>()
                .with_context(|| format!("DAILY_LIMIT_ENABLED must be true or false, got {value:?}"))?,
            None => true,
        };

        let api_timeout = non_blank(&lookup, "LIKE_API_TIMEOUT_SECS")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| {
                        format!("LIKE_API_TIMEOUT_SECS must be a whole number of seconds, got {value:?}")
                    })
            })
            .transpose()?;

        let data_dir = non_blank(&lookup, "DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("data"));

        Ok(Self {
            discord_token,
            api_url: api_url.trim().trim_end_matches('/').to_string(),
            command_prefix,
            daily_limit_enabled,
            api_timeout,
            data_dir,
        })
    }

    pub fn like_config_path(&self) -> PathBuf {
        self.data_dir.join("like_channels.json")
    }

    pub fn daily_usage_path(&self) -> PathBuf {
        self.data_dir.join("daily_usage.json")
    }
}

/// Blank values count as unset.
fn non_blank(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.trim().is_empty())
}
