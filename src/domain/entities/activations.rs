use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::plans::PlanEntity;
use crate::domain::errors::CatalogError;
use crate::domain::value_objects::timestamps::{
    deserialize_instant, deserialize_optional_instant,
};

/// Activation as it appears in the seed. Expiry and period length may be implied by the plan.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivationRow {
    #[serde(alias = "subscriptionId")]
    pub plan_id: String,
    #[serde(deserialize_with = "deserialize_instant")]
    pub activated_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub expires_at: Option<DateTime<Utc>>,
    pub renew_period_days: Option<u32>,
    pub will_auto_renew: Option<bool>,
    #[serde(default)]
    pub company_ids: Vec<String>,
}

/// A user's activation of a plan with its current period fully resolved.
///
/// Status is never stored here; it is derived from `expires_at` and "now" on every query.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivationEntity {
    pub plan_id: String,
    pub activated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub renew_period_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub will_auto_renew: Option<bool>,
    pub company_ids: Vec<String>,
}

impl ActivationRow {
    /// Fills in the period length and expiry from `plan` where the row leaves them implied.
    pub fn resolve(self, plan: &PlanEntity) -> Result<ActivationEntity, CatalogError> {
        let renew_period_days = self
            .renew_period_days
            .filter(|days| *days > 0)
            .unwrap_or(plan.renewal_period_days);

        let expires_at = match self.expires_at {
            Some(expires_at) => expires_at,
            None => Duration::try_days(i64::from(renew_period_days))
                .and_then(|period| self.activated_at.checked_add_signed(period))
                .ok_or_else(|| CatalogError::PeriodOutOfRange {
                    plan_id: self.plan_id.clone(),
                    renew_period_days,
                })?,
        };

        if expires_at <= self.activated_at {
            return Err(CatalogError::NonPositivePeriod {
                plan_id: self.plan_id,
                activated_at: self.activated_at.to_rfc3339(),
            });
        }

        Ok(ActivationEntity {
            plan_id: self.plan_id,
            activated_at: self.activated_at,
            expires_at,
            renew_period_days,
            will_auto_renew: self.will_auto_renew,
            company_ids: self.company_ids,
        })
    }
}
