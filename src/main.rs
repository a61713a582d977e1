// This is the entry point of the like bot.
//
// **Architecture Overview:**
// - `core/` = Business logic (platform-agnostic)
// - `infra/` = Implementations of core traits (JSON files, the like API)
// - `discord/` = Discord-specific adapters (commands, replies)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Set up the Discord framework
// 4. Register commands

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with half a dozen mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "discord/discord_layer.rs"]
mod discord;
#[path = "infra/infra_layer.rs"]
mod infra;

mod config;

use crate::config::BotConfig;
use crate::core::like_config::LikeConfigService;
use crate::core::likes::{CooldownTracker, LikeService};
use crate::core::quota::QuotaService;
use crate::discord::commands::presence;
use crate::discord::{Data, Error};
use crate::infra::like_api::LikeApiClient;
use crate::infra::like_config::JsonLikeConfigStore;
use crate::infra::quota::JsonUsageStore;
use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log command failures and give the user a generic answer; everything else
/// goes to poise's default handler.
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                command = %ctx.command().qualified_name,
                user_id = ctx.author().id.get(),
                error = %error,
                "Command failed"
            );
            if let Err(e) = ctx
                .say("❌ Something went wrong while running this command. Please try again later.")
                .await
            {
                tracing::warn!("Failed to report command error: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();

    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_env()?;

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // This is the "composition root" where we wire everything together.

    let like_config = Arc::new(
        LikeConfigService::new(JsonLikeConfigStore::new(config.like_config_path()))
            .await
            .context("Failed to load like channel config")?,
    );

    let quota = if config.daily_limit_enabled {
        Some(QuotaService::new(JsonUsageStore::new(
            config.daily_usage_path(),
        )))
    } else {
        tracing::info!("Daily like limit is disabled");
        None
    };

    let api_client = LikeApiClient::new(&config.api_url, config.api_timeout)
        .context("Failed to create like API client")?;

    let likes = Arc::new(LikeService::new(
        api_client,
        Arc::clone(&like_config),
        quota,
        CooldownTracker::default(),
    ));

    // Shared across all commands
    let data = Data { like_config, likes };

    // ========================================================================
    // DISCORD FRAMEWORK SETUP
    // ========================================================================

    let intents = serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::MESSAGE_CONTENT // Required for prefix commands
        | serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::DIRECT_MESSAGES;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![
                discord::commands::like::like(),
                discord::commands::auto_like::auto_like(),
                discord::commands::settings::set_like_channel(),
                discord::commands::settings::set_premium_role(),
            ],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(config.command_prefix.clone()),
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                tracing::info!(user = %ready.user.name, "Bot is starting up");

                // Global registration can take a while to propagate
                poise::builtins::register_globally(ctx, &framework.options().commands).await?;
                tracing::info!(
                    count = framework.options().commands.len(),
                    "Commands registered"
                );

                presence::on_ready(ctx);
                Ok(data)
            })
        })
        .build();

    // Create the client and start the bot
    let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await
        .context("Error creating client")?;

    client.start().await.context("Error running bot")?;
    Ok(())
}
