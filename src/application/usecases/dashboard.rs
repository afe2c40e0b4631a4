use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::application::usecases::{
    subscription_lifecycle::SubscriptionLifecycleUseCase,
    subscription_progress::compute_progress, wallet::WalletUseCase,
};
use crate::config::config_model::Preview;
use crate::domain::{
    clock::Clock,
    repositories::{activations::ActivationRepository, plans::PlanRepository},
    value_objects::{
        activations::ActiveSubscriptionCardDto, dashboard::HomeDashboardDto,
        enums::category_ids::CategoryId, progress::ProgressInput,
    },
};

pub struct DashboardUseCase<P, A, C>
where
    P: PlanRepository + Send + Sync + 'static,
    A: ActivationRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    wallet: Arc<WalletUseCase>,
    lifecycle: Arc<SubscriptionLifecycleUseCase<P, A, C>>,
    preview: Preview,
}

impl<P, A, C> DashboardUseCase<P, A, C>
where
    P: PlanRepository + Send + Sync + 'static,
    A: ActivationRepository + Send + Sync + 'static,
    C: Clock + Send + Sync + 'static,
{
    pub fn new(
        wallet: Arc<WalletUseCase>,
        lifecycle: Arc<SubscriptionLifecycleUseCase<P, A, C>>,
        preview: Preview,
    ) -> Self {
        Self {
            wallet,
            lifecycle,
            preview,
        }
    }

    pub fn home(
        &self,
        query: &str,
        category_id: Option<CategoryId>,
        now: DateTime<Utc>,
    ) -> HomeDashboardDto {
        let matching = self.wallet.companies_by_search(query, category_id);
        let matching_cards = matching.len();
        let loyalty_cards = matching
            .into_iter()
            .take(self.preview.loyalty_cards)
            .collect();

        let active_subscriptions: Vec<ActiveSubscriptionCardDto> = self
            .lifecycle
            .list_active_with_plans(now)
            .into_iter()
            .take(self.preview.active_subscriptions)
            .map(|subscription| {
                let progress =
                    compute_progress(&ProgressInput::from(&subscription.record.activation), now);
                ActiveSubscriptionCardDto {
                    subscription,
                    progress,
                }
            })
            .collect();

        let dashboard = HomeDashboardDto {
            total_balance: self.wallet.total_balance(),
            loyalty_cards,
            matching_cards,
            active_subscriptions,
        };

        info!(
            total_balance = dashboard.total_balance,
            matching_cards = dashboard.matching_cards,
            shown_cards = dashboard.loyalty_cards.len(),
            active_subscriptions = dashboard.active_subscriptions.len(),
            "dashboard: home snapshot built"
        );

        dashboard
    }

    pub fn home_now(&self, query: &str, category_id: Option<CategoryId>) -> HomeDashboardDto {
        self.home(query, category_id, self.lifecycle.now())
    }
}
