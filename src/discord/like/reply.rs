// Replies that clean themselves up.
//
// Gate denials, config confirmations and failed lookups are only useful for a
// moment, so they get deleted a few seconds after being sent.

use crate::discord::{Context, Error};
use std::time::Duration;

const TRANSIENT_REPLY_LIFETIME: Duration = Duration::from_secs(5);

/// Send a reply and delete it after [`TRANSIENT_REPLY_LIFETIME`].
pub async fn send_temp(ctx: Context<'_>, reply: poise::CreateReply) -> Result<(), Error> {
    let handle = ctx.send(reply).await?;
    let message = handle.into_message().await?;
    let http = ctx.serenity_context().http.clone();

    tokio::spawn(async move {
        tokio::time::sleep(TRANSIENT_REPLY_LIFETIME).await;

        if let Err(e) = message.delete(&http).await {
            tracing::warn!(
                message_id = message.id.get(),
                error = %e,
                "Failed to delete transient reply"
            );
        }
    });

    Ok(())
}

pub async fn say_temp(ctx: Context<'_>, text: impl Into<String>) -> Result<(), Error> {
    send_temp(ctx, poise::CreateReply::default().content(text.into())).await
}
