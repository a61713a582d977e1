// Admin commands that edit the per-server like config.

use crate::core::like_config::LikeMode;
use crate::discord::formatter;
use crate::discord::reply::say_temp;
use crate::discord::{Context, Error};
use poise::serenity_prelude::{self as serenity, Mentionable};

/// Allow or disallow `/like` in a channel. Running it again on the same
/// channel removes it.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    rename = "setlikechannel"
)]
pub async fn set_like_channel(
    ctx: Context<'_>,
    #[description = "The channel to allow/disallow the /like command in"]
    channel: serenity::GuildChannel,
) -> Result<(), Error> {
    toggle_channel(ctx, LikeMode::Like, &channel).await
}

/// Set the premium role for unlimited like access.
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    rename = "setpremiumrole"
)]
pub async fn set_premium_role(
    ctx: Context<'_>,
    #[description = "Members with this role skip the daily like limit"] role: serenity::Role,
) -> Result<(), Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or("This command only works in servers")?
        .get();

    ctx.data()
        .like_config
        .set_premium_role(guild_id, role.id.get())
        .await?;

    tracing::info!(guild_id, role_id = role.id.get(), "Premium role updated");
    say_temp(ctx, format!("✅ Premium role set to {}.", role.mention())).await
}

/// Toggle `channel` in the allow-list for `mode` and confirm.
pub async fn toggle_channel(
    ctx: Context<'_>,
    mode: LikeMode,
    channel: &serenity::GuildChannel,
) -> Result<(), Error> {
    let guild_id = ctx
        .guild_id()
        .ok_or("This command only works in servers")?
        .get();

    let allowed = ctx
        .data()
        .like_config
        .toggle_channel(guild_id, mode, channel.id.get())
        .await?;

    tracing::info!(
        guild_id,
        channel_id = channel.id.get(),
        %mode,
        allowed,
        "Like channel toggled"
    );

    say_temp(
        ctx,
        formatter::channel_toggle_message(mode, &channel.mention().to_string(), allowed),
    )
    .await
}
