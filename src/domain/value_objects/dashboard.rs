use serde::Serialize;

use crate::domain::entities::companies::CompanyEntity;
use crate::domain::value_objects::activations::ActiveSubscriptionCardDto;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HomeDashboardDto {
    pub total_balance: u64,
    /// Partners matching the current search, cut to the preview limit.
    pub loyalty_cards: Vec<CompanyEntity>,
    pub matching_cards: usize,
    pub active_subscriptions: Vec<ActiveSubscriptionCardDto>,
}
