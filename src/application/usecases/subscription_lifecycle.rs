use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{
    clock::Clock,
    entities::activations::ActivationEntity,
    repositories::{activations::ActivationRepository, plans::PlanRepository},
    value_objects::{
        activations::{ActiveSubscriptionDto, ClassifiedActivation},
        enums::activation_statuses::ActivationStatus,
    },
};

/// `expired` iff `now >= expires_at`. An activation expiring exactly at `now` is expired.
pub fn classify(activation: &ActivationEntity, now: DateTime<Utc>) -> ActivationStatus {
    if now >= activation.expires_at {
        ActivationStatus::Expired
    } else {
        ActivationStatus::Active
    }
}

/// Splits activations into (active, expired), keeping ledger order within each side.
pub fn partition(
    activations: Vec<ActivationEntity>,
    now: DateTime<Utc>,
) -> (Vec<ClassifiedActivation>, Vec<ClassifiedActivation>) {
    activations
        .into_iter()
        .map(|activation| {
            let status = classify(&activation, now);
            ClassifiedActivation { activation, status }
        })
        .partition(|record| record.status == ActivationStatus::Active)
}

pub struct SubscriptionLifecycleUseCase<P, A, C>
where
    P: PlanRepository + Send + Sync + 'static,
    A: ActivationRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    activation_repo: Arc<A>,
    clock: Arc<C>,
}

impl<P, A, C> SubscriptionLifecycleUseCase<P, A, C>
where
    P: PlanRepository + Send + Sync + 'static,
    A: ActivationRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, activation_repo: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            plan_repo,
            activation_repo,
            clock,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn list_active(&self, now: DateTime<Utc>) -> Vec<ClassifiedActivation> {
        let (active, _) = partition(self.activation_repo.list_activations(), now);
        debug!(active = active.len(), %now, "subscriptions: active activations listed");
        active
    }

    pub fn list_expired(&self, now: DateTime<Utc>) -> Vec<ClassifiedActivation> {
        let (_, expired) = partition(self.activation_repo.list_activations(), now);
        debug!(expired = expired.len(), %now, "subscriptions: expired activations listed");
        expired
    }

    pub fn list_active_now(&self) -> Vec<ClassifiedActivation> {
        self.list_active(self.now())
    }

    pub fn list_expired_now(&self) -> Vec<ClassifiedActivation> {
        self.list_expired(self.now())
    }

    /// Active activations joined with their plan. Activations whose plan is gone are skipped.
    pub fn list_active_with_plans(&self, now: DateTime<Utc>) -> Vec<ActiveSubscriptionDto> {
        self.list_active(now)
            .into_iter()
            .filter_map(|record| {
                let Some(plan) = self.plan_repo.find_by_id(&record.activation.plan_id) else {
                    debug!(
                        plan_id = %record.activation.plan_id,
                        "subscriptions: plan not found for active activation; skipping"
                    );
                    return None;
                };
                Some(ActiveSubscriptionDto { record, plan })
            })
            .collect()
    }
}
