// Like service - runs the gate chain and hands admitted requests to the API.
//
// Gates run in a fixed order and the first denial wins:
//   1. channel allow-list
//   2. daily quota (only when enabled)
//   3. per-user cooldown (refreshed before validation on purpose)
//   4. argument validation
//
// Nothing here talks to Discord or HTTP directly.

use super::like_gates::{validate_arguments, CooldownTracker};
use super::like_models::{Admission, GateDenial, LikeInvocation, LikeOutcome, LikeRequest};
use crate::core::like_config::{LikeConfigService, LikeConfigStore, StoreError};
use crate::core::quota::{QuotaDecision, QuotaService, UsageStore};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LikeError {
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

/// Port for the external game API.
///
/// Every failure is folded into `LikeOutcome`; a single call is a single
/// attempt, implementations must not retry.
#[async_trait]
pub trait LikeApi: Send + Sync {
    async fn send_like(&self, request: &LikeRequest) -> LikeOutcome;
}

/// Internal short-circuit for the gate chain so each gate can use `?`.
enum GateStop {
    Denied(GateDenial),
    Store(StoreError),
}

impl From<GateDenial> for GateStop {
    fn from(denial: GateDenial) -> Self {
        GateStop::Denied(denial)
    }
}

impl From<StoreError> for GateStop {
    fn from(err: StoreError) -> Self {
        GateStop::Store(err)
    }
}

pub struct LikeService<A: LikeApi, C: LikeConfigStore, U: UsageStore> {
    api: A,
    config: Arc<LikeConfigService<C>>,
    /// `None` when the daily quota feature is switched off.
    quota: Option<QuotaService<U>>,
    cooldowns: CooldownTracker,
}

impl<A: LikeApi, C: LikeConfigStore, U: UsageStore> LikeService<A, C, U> {
    pub fn new(
        api: A,
        config: Arc<LikeConfigService<C>>,
        quota: Option<QuotaService<U>>,
        cooldowns: CooldownTracker,
    ) -> Self {
        Self {
            api,
            config,
            quota,
            cooldowns,
        }
    }

    /// Run every gate for an invocation.
    ///
    /// Returns `Admission::Denied` for user-facing refusals; `Err` only when
    /// the quota could not be persisted.
    pub async fn admit(&self, invocation: &LikeInvocation) -> Result<Admission, LikeError> {
        match self.run_gates(invocation).await {
            Ok(request) => Ok(Admission::Admitted(request)),
            Err(GateStop::Denied(denial)) => {
                tracing::debug!(
                    user_id = invocation.user_id,
                    mode = %invocation.mode,
                    ?denial,
                    "Like command denied"
                );
                Ok(Admission::Denied(denial))
            }
            Err(GateStop::Store(err)) => Err(err.into()),
        }
    }

    async fn run_gates(&self, invocation: &LikeInvocation) -> Result<LikeRequest, GateStop> {
        if !self
            .config
            .is_channel_allowed(invocation.guild_id, invocation.channel_id, invocation.mode)
            .await
        {
            return Err(GateDenial::ChannelNotAllowed.into());
        }

        if let Some(quota) = &self.quota {
            let is_premium = self
                .config
                .is_premium(invocation.guild_id, &invocation.role_ids)
                .await;

            match quota.check_daily_limit(invocation.user_id, is_premium).await? {
                QuotaDecision::Exhausted { limit } => {
                    return Err(GateDenial::QuotaExceeded { limit }.into());
                }
                QuotaDecision::PremiumBypass | QuotaDecision::Consumed { .. } => {}
            }
        }

        self.cooldowns.check_and_refresh(invocation.user_id)?;

        Ok(validate_arguments(
            invocation.mode,
            invocation.server.as_deref(),
            invocation.uid.as_deref(),
        )?)
    }

    /// Send an admitted request to the game API. Never retries.
    pub async fn dispatch(&self, request: &LikeRequest) -> LikeOutcome {
        let outcome = self.api.send_like(request).await;

        match &outcome {
            LikeOutcome::Succeeded(receipt) => tracing::info!(
                uid = %request.uid,
                server = %request.server,
                mode = %request.mode,
                likes_added = %receipt.likes_added,
                "Likes delivered"
            ),
            LikeOutcome::Unexpected { cause } => tracing::error!(
                uid = %request.uid,
                server = %request.server,
                %cause,
                "Unexpected error while sending likes"
            ),
            other => tracing::warn!(
                uid = %request.uid,
                server = %request.server,
                outcome = ?other,
                "Like request did not succeed"
            ),
        }

        outcome
    }
}
