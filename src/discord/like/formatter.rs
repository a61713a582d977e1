// Embeds and messages for the like commands.
//
// One fixed template per outcome / denial. No decisions are made here; the
// core already decided what happened, this file only decides how it looks.

use crate::core::like_config::LikeMode;
use crate::core::likes::{GateDenial, LikeOutcome, LikeReceipt, LikeRequest};
use poise::serenity_prelude::{self as serenity, CreateEmbed, CreateEmbedFooter, Mentionable};

const SUCCESS_GREEN: u32 = 0x2ECC71;
const AUTO_LIKE_BLUE: u32 = 0x3498DB;
const FAILURE_RED: u32 = 0xE74C3C;
const WARNING_ORANGE: u32 = 0xF39C12;
const PREMIUM_GOLD: u32 = 0xF1C40F;

/// The user who ran the command, as needed by the templates.
pub struct Requester {
    pub mention: String,
    pub tag: String,
    pub avatar_url: String,
}

impl Requester {
    pub fn from_user(user: &serenity::User) -> Self {
        Self {
            mention: user.mention().to_string(),
            tag: user.tag(),
            avatar_url: user.face(),
        }
    }
}

/// A gate denial is either a short text or (for the quota) an embed.
pub enum DenialMessage {
    Text(String),
    Embed(CreateEmbed),
}

impl DenialMessage {
    pub fn into_reply(self) -> poise::CreateReply {
        match self {
            DenialMessage::Text(text) => poise::CreateReply::default().content(text),
            DenialMessage::Embed(embed) => poise::CreateReply::default().embed(embed),
        }
    }
}

pub fn format_denial(denial: &GateDenial) -> DenialMessage {
    match denial {
        GateDenial::ChannelNotAllowed => DenialMessage::Text(
            "This command is not available in this channel. Please use it in an authorized channel."
                .to_string(),
        ),
        GateDenial::QuotaExceeded { limit } => DenialMessage::Embed(
            CreateEmbed::new()
                .title("🚫 Daily Limit Reached!")
                .description(format!(
                    "❌ You already used your **{} like(s)** today.\n\n\
                     ✨ Upgrade to the **Premium** role and enjoy **Unlimited Likes** 🚀",
                    limit
                ))
                .color(PREMIUM_GOLD)
                .footer(CreateEmbedFooter::new(
                    "⏳ Limit resets every midnight (UTC)",
                ))
                .timestamp(serenity::Timestamp::now()),
        ),
        GateDenial::CooldownActive { remaining_secs } => DenialMessage::Text(format!(
            "Please wait {} seconds before using this command again.",
            remaining_secs
        )),
        GateDenial::MissingArguments => {
            DenialMessage::Text("⚠️ UID and server are required.".to_string())
        }
        GateDenial::InvalidUid => DenialMessage::Text(
            "❌ Invalid UID. Must be at least 6 digits and numbers only.".to_string(),
        ),
    }
}

/// Render the API outcome. `requested_at` is a unix timestamp used for the
/// relative "Time" line.
pub fn format_outcome(
    request: &LikeRequest,
    outcome: &LikeOutcome,
    requester: &Requester,
    requested_at: i64,
) -> CreateEmbed {
    match outcome {
        LikeOutcome::Succeeded(receipt) => {
            build_success_embed(request, receipt, requester, requested_at)
        }
        LikeOutcome::Rejected => CreateEmbed::new()
            .title("❌ LIKE FAILED")
            .description(
                "⚠️ This UID has already received the maximum likes today.\n\
                 Please wait **24 hours** and try again.",
            )
            .color(FAILURE_RED)
            .footer(
                CreateEmbedFooter::new(format!("🔰 Requested by {}", requester.tag))
                    .icon_url(requester.avatar_url.clone()),
            )
            .timestamp(serenity::Timestamp::now()),
        LikeOutcome::PlayerNotFound => CreateEmbed::new()
            .title("Player Not Found")
            .description(format!(
                "The UID {} does not exist or is not accessible.",
                request.uid
            ))
            .color(FAILURE_RED)
            .field(
                "Tip",
                "Make sure that:\n- The UID is correct\n- The player is not private",
                false,
            ),
        LikeOutcome::ApiError { .. } => CreateEmbed::new()
            .title("⚠️ Service Unavailable")
            .description("The Free Fire API is not responding at the moment.")
            .color(WARNING_ORANGE)
            .field("Solution", "Try again in a few minutes.", false),
        LikeOutcome::Timeout => {
            error_embed("Timeout", "The server took too long to respond.")
        }
        // The cause is logged by the service; users only get the generic text
        LikeOutcome::Unexpected { .. } => error_embed(
            "Critical Error",
            "An unexpected error occurred. Please try again later.",
        ),
    }
}

fn build_success_embed(
    request: &LikeRequest,
    receipt: &LikeReceipt,
    requester: &Requester,
    requested_at: i64,
) -> CreateEmbed {
    let (title, description, color) = match request.mode {
        LikeMode::Like => (
            "👑 Likes Delivered 👑",
            "💖 **Likes delivered successfully!**\n✨ Perfect execution!",
            SUCCESS_GREEN,
        ),
        LikeMode::AutoLike => (
            "🤖 Auto Like Complete",
            "⚡ **Auto like sent successfully!**",
            AUTO_LIKE_BLUE,
        ),
    };

    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(color)
        .field(
            "👤 Player Info",
            format!("```UID  : {}\nName : {}```", request.uid, receipt.player),
            true,
        )
        .field(
            "🌍 Server Region",
            format!("```{} Server```", request.server_label()),
            true,
        )
        .field(
            "📊 Like Status",
            format!(
                "```Before: {} likes\nAfter : {} likes\nAdded : {} likes```",
                receipt.likes_before, receipt.likes_after, receipt.likes_added
            ),
            false,
        )
        .field(
            "⚡ Execution Info",
            format!(
                "👤 Requested by: {}\n🕒 Time: <t:{}:R>",
                requester.mention, requested_at
            ),
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Mode: {}",
            request.mode.command_name()
        )))
        .timestamp(serenity::Timestamp::now())
}

fn error_embed(title: &str, description: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("❌ {}", title))
        .description(description)
        .color(FAILURE_RED)
        .footer(CreateEmbedFooter::new("An error occurred."))
        .timestamp(serenity::Timestamp::now())
}

/// Confirmation for `setlikechannel` / `auto_like setup_channel`.
pub fn channel_toggle_message(mode: LikeMode, channel_mention: &str, allowed: bool) -> String {
    let command = match mode {
        LikeMode::Like => "/like",
        LikeMode::AutoLike => "/auto_like send",
    };

    if allowed {
        format!(
            "✅ Channel {} is now **allowed** for `{}`.",
            channel_mention, command
        )
    } else {
        format!(
            "✅ Channel {} has been **removed** from `{}`.",
            channel_mention, command
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn requester() -> Requester {
        Requester {
            mention: "<@42>".to_string(),
            tag: "tester".to_string(),
            avatar_url: "https://cdn.example/avatar.png".to_string(),
        }
    }

    fn request(mode: LikeMode) -> LikeRequest {
        LikeRequest {
            uid: "123456789".to_string(),
            server: "ind".to_string(),
            mode,
        }
    }

    fn embed_json(embed: &CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    /// All field names and values joined, for substring checks.
    fn fields_text(json: &Value) -> String {
        json["fields"]
            .as_array()
            .map(|fields| {
                fields
                    .iter()
                    .map(|f| format!("{}\n{}", f["name"], f["value"].as_str().unwrap_or("")))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default()
    }

    #[test]
    fn success_embed_shows_exact_api_values() {
        let outcome = LikeOutcome::Succeeded(LikeReceipt {
            player: "Ace".to_string(),
            likes_before: "10".to_string(),
            likes_after: "15".to_string(),
            likes_added: "5".to_string(),
        });

        let json = embed_json(&format_outcome(
            &request(LikeMode::Like),
            &outcome,
            &requester(),
            1_700_000_000,
        ));
        let text = fields_text(&json);

        assert_eq!(json["color"], SUCCESS_GREEN);
        assert!(text.contains("UID  : 123456789"));
        assert!(text.contains("Name : Ace"));
        assert!(text.contains("IND Server"));
        assert!(text.contains("Before: 10 likes"));
        assert!(text.contains("After : 15 likes"));
        assert!(text.contains("Added : 5 likes"));
        assert!(text.contains("<@42>"));
        assert!(text.contains("<t:1700000000:R>"));
    }

    #[test]
    fn auto_like_success_has_its_own_styling() {
        let outcome = LikeOutcome::Succeeded(LikeReceipt {
            player: "Ace".to_string(),
            likes_before: "1".to_string(),
            likes_after: "2".to_string(),
            likes_added: "1".to_string(),
        });

        let like = embed_json(&format_outcome(&request(LikeMode::Like), &outcome, &requester(), 0));
        let auto = embed_json(&format_outcome(
            &request(LikeMode::AutoLike),
            &outcome,
            &requester(),
            0,
        ));

        assert_ne!(like["title"], auto["title"]);
        assert_eq!(auto["color"], AUTO_LIKE_BLUE);
    }

    #[test]
    fn each_failure_has_a_distinct_template() {
        let outcomes = [
            LikeOutcome::Rejected,
            LikeOutcome::PlayerNotFound,
            LikeOutcome::ApiError { status: 500 },
            LikeOutcome::Timeout,
            LikeOutcome::Unexpected {
                cause: "connection reset".to_string(),
            },
        ];

        let titles: Vec<String> = outcomes
            .iter()
            .map(|o| {
                embed_json(&format_outcome(&request(LikeMode::Like), o, &requester(), 0))["title"]
                    .as_str()
                    .unwrap()
                    .to_string()
            })
            .collect();

        for (i, a) in titles.iter().enumerate() {
            for b in &titles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn player_not_found_mentions_the_uid() {
        let json = embed_json(&format_outcome(
            &request(LikeMode::Like),
            &LikeOutcome::PlayerNotFound,
            &requester(),
            0,
        ));
        assert_eq!(json["title"], "Player Not Found");
        assert!(json["description"].as_str().unwrap().contains("123456789"));
    }

    #[test]
    fn timeout_uses_the_timeout_template() {
        let json = embed_json(&format_outcome(
            &request(LikeMode::Like),
            &LikeOutcome::Timeout,
            &requester(),
            0,
        ));
        assert_eq!(json["title"], "❌ Timeout");
        assert_eq!(json["description"], "The server took too long to respond.");
    }

    #[test]
    fn unexpected_errors_never_leak_the_cause() {
        let json = embed_json(&format_outcome(
            &request(LikeMode::Like),
            &LikeOutcome::Unexpected {
                cause: "dns error: secret-host.internal".to_string(),
            },
            &requester(),
            0,
        ));
        assert!(!json.to_string().contains("secret-host"));
    }

    #[test]
    fn cooldown_denial_reports_remaining_seconds() {
        match format_denial(&GateDenial::CooldownActive { remaining_secs: 12 }) {
            DenialMessage::Text(text) => assert_eq!(
                text,
                "Please wait 12 seconds before using this command again."
            ),
            DenialMessage::Embed(_) => panic!("cooldown should be plain text"),
        }
    }

    #[test]
    fn invalid_uid_denial_explains_the_rule() {
        match format_denial(&GateDenial::InvalidUid) {
            DenialMessage::Text(text) => assert!(text.contains("at least 6 digits")),
            DenialMessage::Embed(_) => panic!("invalid uid should be plain text"),
        }
    }

    #[test]
    fn quota_denial_is_a_gold_embed() {
        match format_denial(&GateDenial::QuotaExceeded { limit: 1 }) {
            DenialMessage::Embed(embed) => {
                let json = embed_json(&embed);
                assert_eq!(json["color"], PREMIUM_GOLD);
                assert!(json["description"].as_str().unwrap().contains("1 like(s)"));
            }
            DenialMessage::Text(_) => panic!("quota denial should be an embed"),
        }
    }

    #[test]
    fn requester_mention_comes_from_the_user() {
        let mut user = serenity::User::default();
        user.id = serenity::UserId::new(42);

        assert_eq!(Requester::from_user(&user).mention, "<@42>");
    }

    #[test]
    fn channel_toggle_message_reflects_direction() {
        assert!(channel_toggle_message(LikeMode::Like, "<#1>", true).contains("now **allowed**"));
        assert!(
            channel_toggle_message(LikeMode::AutoLike, "<#1>", false).contains("**removed**")
        );
    }
}
