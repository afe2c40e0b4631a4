use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::activations::ActivationEntity;

/// What the progress calculator needs from an active record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInput {
    pub expires_at: DateTime<Utc>,
    pub renew_period_days: u32,
}

impl From<&ActivationEntity> for ProgressInput {
    fn from(value: &ActivationEntity) -> Self {
        Self {
            expires_at: value.expires_at,
            renew_period_days: value.renew_period_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionProgress {
    pub days_total: u32,
    pub days_passed: u32,
    pub days_left: u32,
    /// Share of the period already elapsed, 0 to 100.
    pub percent: f64,
}

impl SubscriptionProgress {
    /// Share of the period still remaining, clamped to 0..=100. Drives the progress bar.
    pub fn remaining_percent(&self) -> f64 {
        if self.days_total == 0 {
            return 0.0;
        }
        let remaining = f64::from(self.days_left) / f64::from(self.days_total) * 100.0;
        remaining.clamp(0.0, 100.0)
    }

    pub fn days_left_label(&self) -> String {
        match self.days_left {
            0 => "Expires today".to_string(),
            1 => "1 day left".to_string(),
            days => format!("{days} days left"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn progress(days_total: u32, days_left: u32) -> SubscriptionProgress {
        SubscriptionProgress {
            days_total,
            days_passed: days_total.saturating_sub(days_left),
            days_left,
            percent: 0.0,
        }
    }

    #[test]
    fn labels_follow_days_left() {
        assert_eq!(progress(30, 0).days_left_label(), "Expires today");
        assert_eq!(progress(30, 1).days_left_label(), "1 day left");
        assert_eq!(progress(30, 12).days_left_label(), "12 days left");
    }

    #[test]
    fn remaining_percent_is_clamped() {
        assert_eq!(progress(0, 5).remaining_percent(), 0.0);
        assert_eq!(progress(7, 14).remaining_percent(), 100.0);
        assert!((progress(30, 15).remaining_percent() - 50.0).abs() < 1e-9);
    }
}
