use tracing::warn;

use crate::domain::errors::CatalogError;
use crate::domain::value_objects::enums::renewal_periods::RenewalPeriod;

/// Reconciles the two ways a plan can state its period into one day count.
///
/// A positive explicit `renewPeriodDays` wins. Otherwise the named period is converted with
/// day = 1, week = 7 and month = 30. A plan with neither is rejected.
pub fn resolve_renewal_period_days(
    plan_id: &str,
    renewal_period: Option<&str>,
    explicit_days: Option<u32>,
) -> Result<u32, CatalogError> {
    let named = renewal_period.and_then(RenewalPeriod::from_str);

    match (explicit_days.filter(|days| *days > 0), named) {
        (Some(days), Some(period)) => {
            if days != period.days() {
                warn!(
                    plan_id,
                    renewal_period = %period,
                    explicit_days = days,
                    "catalog: explicit period length disagrees with named period; using explicit days"
                );
            }
            Ok(days)
        }
        (Some(days), None) => Ok(days),
        (None, Some(period)) => Ok(period.days()),
        (None, None) => Err(CatalogError::UnknownRenewalPeriod {
            plan_id: plan_id.to_string(),
            value: renewal_period.map(str::to_string),
        }),
    }
}
