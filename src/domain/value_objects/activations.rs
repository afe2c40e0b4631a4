use serde::Serialize;

use crate::domain::entities::{activations::ActivationEntity, plans::PlanEntity};
use crate::domain::value_objects::enums::{
    activation_statuses::ActivationStatus, category_ids::CategoryId,
};
use crate::domain::value_objects::progress::SubscriptionProgress;

/// An activation with the status derived for one particular `now`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClassifiedActivation {
    #[serde(flatten)]
    pub activation: ActivationEntity,
    pub status: ActivationStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveSubscriptionDto {
    #[serde(flatten)]
    pub record: ClassifiedActivation,
    pub plan: PlanEntity,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ActiveSubscriptionCardDto {
    #[serde(flatten)]
    pub subscription: ActiveSubscriptionDto,
    pub progress: SubscriptionProgress,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExpiredHistoryItem {
    #[serde(flatten)]
    pub record: ClassifiedActivation,
    pub plan: PlanEntity,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpiredHistoryGroup {
    pub category_id: CategoryId,
    pub category_name: String,
    pub items: Vec<ExpiredHistoryItem>,
}
