// Stateless and in-memory gates: cooldown and argument validation.
// The channel and quota gates live with their stores (like_config, quota).

use super::like_models::{GateDenial, LikeRequest};
use crate::core::like_config::LikeMode;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Minimum time between two like commands from the same user.
pub const LIKE_COOLDOWN: Duration = Duration::from_secs(30);

/// UIDs are numeric and at least this long.
pub const MIN_UID_LEN: usize = 6;

/// Per-user cooldown, kept in memory only (lost on restart).
pub struct CooldownTracker {
    window: Duration,
    last_used: DashMap<u64, Instant>,
}

impl CooldownTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_used: DashMap::new(),
        }
    }

    /// Deny if the user is still cooling down, otherwise stamp `now` as their
    /// latest use.
    pub fn check_and_refresh(&self, user_id: u64) -> Result<(), GateDenial> {
        self.check_and_refresh_at(user_id, Instant::now())
    }

    pub fn check_and_refresh_at(&self, user_id: u64, now: Instant) -> Result<(), GateDenial> {
        // entry() holds the shard lock so check + stamp happen together
        match self.last_used.entry(user_id) {
            Entry::Occupied(mut entry) => {
                let elapsed_secs = now.saturating_duration_since(*entry.get()).as_secs();
                let window_secs = self.window.as_secs();
                if elapsed_secs < window_secs {
                    return Err(GateDenial::CooldownActive {
                        remaining_secs: window_secs - elapsed_secs,
                    });
                }
                entry.insert(now);
            }
            Entry::Vacant(entry) => {
                entry.insert(now);
            }
        }

        Ok(())
    }
}

impl Default for CooldownTracker {
    fn default() -> Self {
        Self::new(LIKE_COOLDOWN)
    }
}

pub fn is_valid_uid(uid: &str) -> bool {
    uid.len() >= MIN_UID_LEN && uid.chars().all(|c| c.is_ascii_digit())
}

/// Both arguments must be present and non-empty; the uid must be numeric.
/// Neither is trimmed, and the server is passed on exactly as typed.
pub fn validate_arguments(
    mode: LikeMode,
    server: Option<&str>,
    uid: Option<&str>,
) -> Result<LikeRequest, GateDenial> {
    let server = server.filter(|s| !s.is_empty());
    let uid = uid.filter(|u| !u.is_empty());
    let (Some(server), Some(uid)) = (server, uid) else {
        return Err(GateDenial::MissingArguments);
    };

    if !is_valid_uid(uid) {
        return Err(GateDenial::InvalidUid);
    }

    Ok(LikeRequest {
        uid: uid.to_string(),
        server: server.to_string(),
        mode,
    })
}
