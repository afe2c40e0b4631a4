use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::application::usecases::subscription_lifecycle::partition;
use crate::domain::{
    repositories::{
        activations::ActivationRepository, categories::CategoryRepository, plans::PlanRepository,
    },
    value_objects::{
        activations::{ExpiredHistoryGroup, ExpiredHistoryItem},
        enums::category_ids::CategoryId,
    },
};

/// Order in which expired-history groups are listed.
pub const HISTORY_CATEGORY_ORDER: [CategoryId; 8] = [
    CategoryId::Coffee,
    CategoryId::Food,
    CategoryId::Fitness,
    CategoryId::Beauty,
    CategoryId::Barber,
    CategoryId::Pharmacy,
    CategoryId::Retail,
    CategoryId::Other,
];

pub struct SubscriptionHistoryUseCase<P, A, K>
where
    P: PlanRepository + Send + Sync + 'static,
    A: ActivationRepository + Send + Sync + 'static,
    K: CategoryRepository + Send + Sync + 'static,
{
    plan_repo: Arc<P>,
    activation_repo: Arc<A>,
    category_repo: Arc<K>,
}

impl<P, A, K> SubscriptionHistoryUseCase<P, A, K>
where
    P: PlanRepository + Send + Sync + 'static,
    A: ActivationRepository + Send + Sync + 'static,
    K: CategoryRepository + Send + Sync + 'static,
{
    pub fn new(plan_repo: Arc<P>, activation_repo: Arc<A>, category_repo: Arc<K>) -> Self {
        Self {
            plan_repo,
            activation_repo,
            category_repo,
        }
    }

    /// Expired activations grouped by their plan's category. Empty groups are left out.
    pub fn expired_history(&self, now: DateTime<Utc>) -> Vec<ExpiredHistoryGroup> {
        let (_, expired) = partition(self.activation_repo.list_activations(), now);

        let mut grouped: HashMap<CategoryId, Vec<ExpiredHistoryItem>> = HashMap::new();
        for record in expired {
            let Some(plan) = self.plan_repo.find_by_id(&record.activation.plan_id) else {
                debug!(
                    plan_id = %record.activation.plan_id,
                    "subscription_history: plan not found; skipping"
                );
                continue;
            };
            let category_id = plan.category_id.unwrap_or(CategoryId::Other);
            grouped
                .entry(category_id)
                .or_default()
                .push(ExpiredHistoryItem { record, plan });
        }

        HISTORY_CATEGORY_ORDER
            .iter()
            .filter_map(|category_id| {
                let items = grouped.remove(category_id)?;
                let category_name = self
                    .category_repo
                    .find_by_id(*category_id)
                    .map(|category| category.name)
                    .unwrap_or_else(|| "Other".to_string());
                Some(ExpiredHistoryGroup {
                    category_id: *category_id,
                    category_name,
                    items,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::{
            activations::ActivationEntity, categories::CategoryEntity, plans::PlanEntity,
        },
        repositories::{
            activations::MockActivationRepository, categories::MockCategoryRepository,
            plans::MockPlanRepository,
        },
    };
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn activation(plan_id: &str, expires_at: DateTime<Utc>) -> ActivationEntity {
        ActivationEntity {
            plan_id: plan_id.to_string(),
            activated_at: expires_at - Duration::days(7),
            expires_at,
            renew_period_days: 7,
            will_auto_renew: None,
            company_ids: vec![],
        }
    }

    fn plan(id: &str, category_id: Option<CategoryId>) -> PlanEntity {
        PlanEntity {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            price: 100,
            price_label: "100 pts/week".to_string(),
            renewal_period_days: 7,
            renewal_label: "Weekly".to_string(),
            benefits: vec![],
            company_id: None,
            category_id,
            image: None,
        }
    }

    fn use_case(
        activations: Vec<ActivationEntity>,
        plans: Vec<PlanEntity>,
    ) -> SubscriptionHistoryUseCase<MockPlanRepository, MockActivationRepository, MockCategoryRepository>
    {
        let mut plan_repo = MockPlanRepository::new();
        let mut activation_repo = MockActivationRepository::new();
        let mut category_repo = MockCategoryRepository::new();

        activation_repo
            .expect_list_activations()
            .returning(move || activations.clone());
        plan_repo
            .expect_find_by_id()
            .returning(move |plan_id| plans.iter().find(|plan| plan.id == plan_id).cloned());
        category_repo
            .expect_find_by_id()
            .returning(|category_id| match category_id {
                CategoryId::Coffee => Some(CategoryEntity {
                    id: CategoryId::Coffee,
                    name: "Coffee".to_string(),
                    slug: "coffee".to_string(),
                    icon: None,
                }),
                CategoryId::Fitness => Some(CategoryEntity {
                    id: CategoryId::Fitness,
                    name: "Fitness".to_string(),
                    slug: "fitness".to_string(),
                    icon: None,
                }),
                _ => None,
            });

        SubscriptionHistoryUseCase::new(
            Arc::new(plan_repo),
            Arc::new(activation_repo),
            Arc::new(category_repo),
        )
    }

    #[test]
    fn groups_follow_fixed_category_order() {
        let now = at(2026, 6, 1);
        let use_case = use_case(
            vec![
                activation("gym", at(2026, 5, 1)),
                activation("loose", at(2026, 5, 2)),
                activation("coffee", at(2026, 5, 3)),
                activation("still-running", at(2026, 7, 1)),
            ],
            vec![
                plan("gym", Some(CategoryId::Fitness)),
                plan("loose", None),
                plan("coffee", Some(CategoryId::Coffee)),
                plan("still-running", Some(CategoryId::Coffee)),
            ],
        );

        let groups = use_case.expired_history(now);
        let order: Vec<CategoryId> = groups.iter().map(|group| group.category_id).collect();

        assert_eq!(
            order,
            vec![CategoryId::Coffee, CategoryId::Fitness, CategoryId::Other]
        );
        assert_eq!(groups[0].category_name, "Coffee");
        assert_eq!(groups[0].items.len(), 1);
        assert_eq!(groups[0].items[0].plan.id, "coffee");
        assert_eq!(groups[2].category_name, "Other");
        assert_eq!(groups[2].items[0].plan.id, "loose");
    }

    #[test]
    fn records_with_unknown_plans_are_skipped() {
        let now = at(2026, 6, 1);
        let use_case = use_case(vec![activation("ghost", at(2026, 5, 1))], vec![]);

        assert!(use_case.expired_history(now).is_empty());
    }
}
