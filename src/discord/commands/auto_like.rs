// Auto-like command group. Works like `/like` but is gated by its own
// channel allow-list and uses its own success styling.

use crate::core::like_config::LikeMode;
use crate::discord::commands::like::run_like;
use crate::discord::commands::settings::toggle_channel;
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

/// Auto-like commands.
#[poise::command(
    slash_command,
    prefix_command,
    subcommands("setup_channel", "send"),
    subcommand_required
)]
pub async fn auto_like(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Allow or disallow auto-like in a channel.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "ADMINISTRATOR"
)]
pub async fn setup_channel(
    ctx: Context<'_>,
    #[description = "The channel to allow/disallow auto-like in"] channel: serenity::GuildChannel,
) -> Result<(), Error> {
    toggle_channel(ctx, LikeMode::AutoLike, &channel).await
}

/// Send an auto like to a Free Fire player.
#[poise::command(slash_command, prefix_command)]
pub async fn send(
    ctx: Context<'_>,
    #[description = "Game server region (e.g. IND, BR, SG)"] server: Option<String>,
    #[description = "Player UID (numbers only, minimum 6 characters)"] uid: Option<String>,
) -> Result<(), Error> {
    run_like(ctx, LikeMode::AutoLike, server, uid).await
}
