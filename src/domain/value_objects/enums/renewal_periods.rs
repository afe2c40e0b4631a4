use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A month-long period is always this many days. Calendar month lengths are ignored.
pub const DAYS_PER_MONTH: u32 = 30;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RenewalPeriod {
    Day,
    Week,
    Month,
}

impl RenewalPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenewalPeriod::Day => "day",
            RenewalPeriod::Week => "week",
            RenewalPeriod::Month => "month",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "day" => Some(RenewalPeriod::Day),
            "week" => Some(RenewalPeriod::Week),
            "month" => Some(RenewalPeriod::Month),
            _ => None,
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            RenewalPeriod::Day => 1,
            RenewalPeriod::Week => 7,
            RenewalPeriod::Month => DAYS_PER_MONTH,
        }
    }
}

impl Display for RenewalPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_periods() {
        assert_eq!(RenewalPeriod::from_str("day"), Some(RenewalPeriod::Day));
        assert_eq!(RenewalPeriod::from_str("week"), Some(RenewalPeriod::Week));
        assert_eq!(RenewalPeriod::from_str("month"), Some(RenewalPeriod::Month));
        assert_eq!(RenewalPeriod::from_str("year"), None);
        assert_eq!(RenewalPeriod::from_str("Month"), None);
    }

    #[test]
    fn month_is_thirty_days() {
        assert_eq!(RenewalPeriod::Day.days(), 1);
        assert_eq!(RenewalPeriod::Week.days(), 7);
        assert_eq!(RenewalPeriod::Month.days(), 30);
    }
}
