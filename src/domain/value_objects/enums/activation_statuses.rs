use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Derived state of an activation. Never stored; recomputed from `expires_at` on every query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActivationStatus {
    Active,
    Expired,
}

impl ActivationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationStatus::Active => "active",
            ActivationStatus::Expired => "expired",
        }
    }
}

impl Display for ActivationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
