// Bot presence.
//
// Only Discord SDK types here (Context, ActivityData, OnlineStatus).

use poise::serenity_prelude as serenity;

/// Called once the bot is ready, advertises the like command.
pub fn on_ready(ctx: &serenity::Context) {
    let activity = serenity::ActivityData::watching("for /like requests");
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}
