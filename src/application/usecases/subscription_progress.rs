use chrono::{DateTime, Utc};

use crate::domain::value_objects::progress::{ProgressInput, SubscriptionProgress};

pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Progress through the current period of an active subscription.
///
/// Expiry is not re-checked: an already expired input reports `days_left = 0` and a full
/// period passed. `percent = days_passed / renew_period_days * 100`, or 0 for a zero-day period.
pub fn compute_progress(input: &ProgressInput, now: DateTime<Utc>) -> SubscriptionProgress {
    let days_total = i64::from(input.renew_period_days);
    let ms_left = (input.expires_at - now).num_milliseconds();
    let days_left = ms_left.div_euclid(MS_PER_DAY).max(0);
    let days_passed = (days_total - days_left).max(0);
    let percent = if days_total > 0 {
        days_passed as f64 / days_total as f64 * 100.0
    } else {
        0.0
    };

    SubscriptionProgress {
        days_total: input.renew_period_days,
        days_passed: saturate(days_passed),
        days_left: saturate(days_left),
        percent,
    }
}

fn saturate(days: i64) -> u32 {
    u32::try_from(days).unwrap_or(u32::MAX)
}
