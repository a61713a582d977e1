// Like domain models - pure data, no Discord or HTTP types.
//
// The Discord layer builds a `LikeInvocation` from the command context,
// the service answers with an `Admission`, and the API port produces a
// `LikeOutcome` that the formatter turns into an embed.

use crate::core::like_config::LikeMode;

/// Everything the gate chain needs to know about one command invocation.
#[derive(Debug, Clone)]
pub struct LikeInvocation {
    pub user_id: u64,
    /// `None` for direct messages.
    pub guild_id: Option<u64>,
    pub channel_id: u64,
    /// Role ids of the invoking member (empty outside guilds).
    pub role_ids: Vec<u64>,
    pub mode: LikeMode,
    /// Raw `server` argument as typed by the user.
    pub server: Option<String>,
    /// Raw `uid` argument as typed by the user.
    pub uid: Option<String>,
}

/// A validated request, ready to be sent to the game API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeRequest {
    pub uid: String,
    /// Passed through verbatim to the API.
    pub server: String,
    pub mode: LikeMode,
}

impl LikeRequest {
    /// Region label used in embeds, e.g. `IND`.
    pub fn server_label(&self) -> String {
        self.server.to_uppercase()
    }
}

/// Player data from a successful like.
///
/// Counts are kept as display strings: the API is loose about whether it
/// sends numbers or strings, and we only ever show them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikeReceipt {
    pub player: String,
    pub likes_before: String,
    pub likes_after: String,
    pub likes_added: String,
}

/// Result of one call to the game API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeOutcome {
    /// API reported `status == 1`.
    Succeeded(LikeReceipt),
    /// API answered but did not deliver (usually: already liked today).
    Rejected,
    /// HTTP 404
    PlayerNotFound,
    /// Any other non-success status.
    ApiError { status: u16 },
    Timeout,
    /// Transport or decoding failure. The cause is for logs only.
    Unexpected { cause: String },
}

impl LikeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LikeOutcome::Succeeded(_))
    }
}

/// Why an invocation was stopped before reaching the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDenial {
    ChannelNotAllowed,
    QuotaExceeded { limit: u32 },
    CooldownActive { remaining_secs: u64 },
    MissingArguments,
    InvalidUid,
}

/// Result of running the gate chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted(LikeRequest),
    Denied(GateDenial),
}
