use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    companies::Location, enums::category_ids::CategoryId,
    timestamps::deserialize_optional_instant,
};

/// A partner merchant and the user's point balance with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanyEntity {
    pub id: String,
    pub name: String,
    pub category_id: CategoryId,
    pub balance: u32,
    pub points_to_next_reward: u32,
    pub points_per_reward: u32,
    #[serde(default)]
    pub expiring_points: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub expiring_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub subscription_ids: Vec<String>,
}
