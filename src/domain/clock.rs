use chrono::{DateTime, Utc};
use mockall::automock;

/// Source of "now" for every lifecycle query.
#[automock]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
