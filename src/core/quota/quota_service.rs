// Daily like quota.
//
// Each user gets a fixed number of likes per UTC calendar day. Members
// holding the guild's premium role skip the quota entirely and never
// consume it. The reset is a date comparison, so there is no timer to run
// at midnight: a record stamped with an older date simply counts as zero.

use crate::core::like_config::StoreError;
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Likes a regular member may send per UTC day.
pub const DAILY_LIKE_LIMIT: u32 = 1;

/// Usage for one user. Serialized as `{"last_reset": "YYYY-MM-DD", "used": n}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUsageRecord {
    pub last_reset: NaiveDate,
    pub used: u32,
}

impl DailyUsageRecord {
    pub fn fresh(today: NaiveDate) -> Self {
        Self {
            last_reset: today,
            used: 0,
        }
    }

    /// The record as seen on `today`: stale records count as unused.
    pub fn as_of(self, today: NaiveDate) -> Self {
        if self.last_reset == today {
            self
        } else {
            Self::fresh(today)
        }
    }
}

/// What the quota gate decided for one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaDecision {
    /// Premium member, nothing consumed.
    PremiumBypass,
    /// One like consumed; `used` is the count after this invocation.
    Consumed { used: u32 },
    /// Nothing left for today.
    Exhausted { limit: u32 },
}

#[async_trait]
pub trait UsageStore: Send + Sync {
    async fn get_usage(&self, user_id: u64) -> Result<Option<DailyUsageRecord>, StoreError>;
    async fn save_usage(&self, user_id: u64, record: DailyUsageRecord) -> Result<(), StoreError>;
}

pub struct QuotaService<S: UsageStore> {
    store: S,
    daily_limit: u32,
}

impl<S: UsageStore> QuotaService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            daily_limit: DAILY_LIKE_LIMIT,
        }
    }

    /// Check (and consume) today's quota for a user.
    pub async fn check_daily_limit(
        &self,
        user_id: u64,
        is_premium: bool,
    ) -> Result<QuotaDecision, StoreError> {
        self.check_daily_limit_on(user_id, is_premium, Utc::now().date_naive())
            .await
    }

    /// Same as [`check_daily_limit`](Self::check_daily_limit) with an explicit UTC date.
    pub async fn check_daily_limit_on(
        &self,
        user_id: u64,
        is_premium: bool,
        today: NaiveDate,
    ) -> Result<QuotaDecision, StoreError> {
        if is_premium {
            return Ok(QuotaDecision::PremiumBypass);
        }

        let record = self
            .store
            .get_usage(user_id)
            .await?
            .map(|r| r.as_of(today))
            .unwrap_or_else(|| DailyUsageRecord::fresh(today));

        if record.used >= self.daily_limit {
            return Ok(QuotaDecision::Exhausted {
                limit: self.daily_limit,
            });
        }

        let updated = DailyUsageRecord {
            used: record.used + 1,
            ..record
        };
        self.store.save_usage(user_id, updated).await?;

        Ok(QuotaDecision::Consumed { used: updated.used })
    }
}
