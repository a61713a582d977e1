// Discord commands for sending likes.
//
// Same pattern as every other command file:
// 1. Extract primitive data from the Discord context
// 2. Run it through the core like service
// 3. Render whatever came back
//
// No gate or API logic lives here.

use crate::core::like_config::{LikeConfigService, LikeMode};
use crate::core::likes::{Admission, LikeInvocation, LikeService};
use crate::discord::formatter::{self, Requester};
use crate::discord::reply::send_temp;
use crate::infra::like_api::LikeApiClient;
use crate::infra::like_config::JsonLikeConfigStore;
use crate::infra::quota::JsonUsageStore;
use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

pub type BotLikeService = LikeService<LikeApiClient, JsonLikeConfigStore, JsonUsageStore>;

/// Shared state, available in every command via `ctx.data()`.
pub struct Data {
    pub like_config: Arc<LikeConfigService<JsonLikeConfigStore>>,
    pub likes: Arc<BotLikeService>,
}

/// Send likes to a Free Fire player.
///
/// **Examples:**
/// - `/like server:IND uid:123456789`
/// - `!like ind 123456789`
#[poise::command(slash_command, prefix_command)]
pub async fn like(
    ctx: Context<'_>,
    #[description = "Game server region (e.g. IND, BR, SG)"] server: Option<String>,
    #[description = "Player UID (numbers only, minimum 6 characters)"] uid: Option<String>,
) -> Result<(), Error> {
    run_like(ctx, LikeMode::Like, server, uid).await
}

/// Shared flow for `like` and `auto_like send`.
pub async fn run_like(
    ctx: Context<'_>,
    mode: LikeMode,
    server: Option<String>,
    uid: Option<String>,
) -> Result<(), Error> {
    let guild_id = ctx.guild_id().map(|id| id.get());
    let role_ids = if guild_id.is_some() {
        member_role_ids(ctx).await
    } else {
        Vec::new()
    };

    let invocation = LikeInvocation {
        user_id: ctx.author().id.get(),
        guild_id,
        channel_id: ctx.channel_id().get(),
        role_ids,
        mode,
        server,
        uid,
    };

    let request = match ctx.data().likes.admit(&invocation).await? {
        Admission::Admitted(request) => request,
        Admission::Denied(denial) => {
            return send_temp(ctx, formatter::format_denial(&denial).into_reply()).await;
        }
    };

    // Shows "thinking..." / typing while the API call is in flight
    ctx.defer().await?;

    let outcome = ctx.data().likes.dispatch(&request).await;
    let embed = formatter::format_outcome(
        &request,
        &outcome,
        &Requester::from_user(ctx.author()),
        chrono::Utc::now().timestamp(),
    );
    let reply = poise::CreateReply::default().embed(embed);

    if outcome.is_success() {
        ctx.send(reply).await?;
        Ok(())
    } else {
        send_temp(ctx, reply).await
    }
}

async fn member_role_ids(ctx: Context<'_>) -> Vec<u64> {
    match ctx.author_member().await {
        Some(member) => member.roles.iter().map(|role| role.get()).collect(),
        None => Vec::new(),
    }
}
