use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    enums::{transaction_statuses::TransactionStatus, transaction_types::TransactionType},
    timestamps::deserialize_instant,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionEntity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub company_id: String,
    pub company_name: String,
    pub amount: u32,
    #[serde(deserialize_with = "deserialize_instant")]
    pub date: DateTime<Utc>,
    pub status: TransactionStatus,
    #[serde(default)]
    pub description: Option<String>,
}
