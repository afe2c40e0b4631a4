use std::sync::Arc;

use anyhow::Result;
use loyalty_wallet::{
    application::usecases::{
        dashboard::DashboardUseCase, subscription_history::SubscriptionHistoryUseCase,
        subscription_lifecycle::SubscriptionLifecycleUseCase, wallet::WalletUseCase,
    },
    config::config_loader,
    domain::clock::SystemClock,
    infrastructure::in_memory::seed::WalletCatalog,
};
use tracing::{error, info};

fn main() {
    if let Err(error) = run() {
        error!("Wallet exited with error: {:#}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    loyalty_wallet::observability::init_observability("wallet")?;

    let dotenvy_env = config_loader::load()?;
    info!(stage = %dotenvy_env.service.stage, "ENV has been loaded");

    let repos = WalletCatalog::load(dotenvy_env.seed.path.as_deref())?.into_repositories();

    let wallet = Arc::new(WalletUseCase::new(
        repos.companies,
        repos.categories.clone(),
        repos.plans.clone(),
        repos.transactions,
    ));
    let lifecycle = Arc::new(SubscriptionLifecycleUseCase::new(
        Arc::clone(&repos.plans),
        Arc::clone(&repos.activations),
        Arc::new(SystemClock),
    ));
    let history =
        SubscriptionHistoryUseCase::new(repos.plans, repos.activations, repos.categories);
    let dashboard = DashboardUseCase::new(wallet, Arc::clone(&lifecycle), dotenvy_env.preview);

    let now = lifecycle.now();
    let home = dashboard.home("", None, now);
    for card in &home.active_subscriptions {
        info!(
            plan_id = %card.subscription.plan.id,
            expires_at = %card.subscription.record.activation.expires_at,
            days_left = card.progress.days_left,
            percent = card.progress.percent,
            label = %card.progress.days_left_label(),
            "wallet: active subscription"
        );
    }

    for group in history.expired_history(now) {
        info!(
            category = %group.category_id,
            expired = group.items.len(),
            "wallet: expired subscriptions"
        );
    }

    Ok(())
}
