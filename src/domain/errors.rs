use thiserror::Error;

/// Data-integrity faults found while loading the catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown renewal period for plan {plan_id}: {value:?}")]
    UnknownRenewalPeriod {
        plan_id: String,
        value: Option<String>,
    },
    #[error("activation of plan {plan_id} must expire after {activated_at}")]
    NonPositivePeriod {
        plan_id: String,
        activated_at: String,
    },
    #[error("period of {renew_period_days} days for plan {plan_id} ends past the supported calendar range")]
    PeriodOutOfRange {
        plan_id: String,
        renew_period_days: u32,
    },
    #[error("malformed seed snapshot: {0}")]
    MalformedSeed(#[from] serde_json::Error),
}
