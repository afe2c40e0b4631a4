use std::{collections::HashMap, fs, path::Path, sync::Arc};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::domain::entities::{
    activations::{ActivationEntity, ActivationRow},
    categories::CategoryEntity,
    companies::CompanyEntity,
    plans::{PlanEntity, PlanRow},
    transactions::TransactionEntity,
};
use crate::domain::errors::CatalogError;
use crate::infrastructure::in_memory::repositories::{
    activations::InMemoryActivationRepository, categories::InMemoryCategoryRepository,
    companies::InMemoryCompanyRepository, plans::InMemoryPlanRepository,
    transactions::InMemoryTransactionRepository,
};

/// Snapshot shipped with the crate, used when no seed path is configured.
pub const EMBEDDED_SEED: &str = include_str!("../../../data/seed.json");

#[derive(Debug, Deserialize)]
struct SeedSnapshot {
    #[serde(default)]
    categories: Vec<CategoryEntity>,
    #[serde(default)]
    companies: Vec<CompanyEntity>,
    #[serde(default, alias = "subscriptions")]
    plans: Vec<PlanRow>,
    #[serde(default, alias = "activeSubscriptions")]
    activations: Vec<ActivationRow>,
    #[serde(default)]
    transactions: Vec<TransactionEntity>,
}

/// Read-only wallet data after period resolution. Built once, then handed to the repositories.
#[derive(Debug, Clone)]
pub struct WalletCatalog {
    pub categories: Vec<CategoryEntity>,
    pub companies: Vec<CompanyEntity>,
    pub plans: Vec<PlanEntity>,
    pub activations: Vec<ActivationEntity>,
    pub transactions: Vec<TransactionEntity>,
}

pub struct InMemoryRepositories {
    pub categories: Arc<InMemoryCategoryRepository>,
    pub companies: Arc<InMemoryCompanyRepository>,
    pub plans: Arc<InMemoryPlanRepository>,
    pub activations: Arc<InMemoryActivationRepository>,
    pub transactions: Arc<InMemoryTransactionRepository>,
}

impl WalletCatalog {
    /// Parses a seed snapshot. Unknown renewal periods abort the load; activations of
    /// unknown plans are dropped.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let snapshot: SeedSnapshot = serde_json::from_str(json)?;

        let plans = snapshot
            .plans
            .into_iter()
            .map(PlanEntity::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let plans_by_id: HashMap<&str, &PlanEntity> =
            plans.iter().map(|plan| (plan.id.as_str(), plan)).collect();

        let mut activations = Vec::with_capacity(snapshot.activations.len());
        for row in snapshot.activations {
            let Some(plan) = plans_by_id.get(row.plan_id.as_str()) else {
                warn!(
                    plan_id = %row.plan_id,
                    "catalog: activation references unknown plan; dropping"
                );
                continue;
            };
            activations.push(row.resolve(plan)?);
        }

        Ok(Self {
            categories: snapshot.categories,
            companies: snapshot.companies,
            plans,
            activations,
            transactions: snapshot.transactions,
        })
    }

    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_SEED)
    }

    /// Loads the seed at `path`, or the embedded one when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read seed file {}", path.display()))?;
                Self::from_json(&raw)
                    .with_context(|| format!("failed to load seed file {}", path.display()))?
            }
            None => Self::embedded().context("failed to load embedded seed")?,
        };

        info!(
            categories = catalog.categories.len(),
            companies = catalog.companies.len(),
            plans = catalog.plans.len(),
            activations = catalog.activations.len(),
            transactions = catalog.transactions.len(),
            "catalog: seed snapshot loaded"
        );

        Ok(catalog)
    }

    pub fn into_repositories(self) -> InMemoryRepositories {
        InMemoryRepositories {
            categories: Arc::new(InMemoryCategoryRepository::new(self.categories)),
            companies: Arc::new(InMemoryCompanyRepository::new(self.companies)),
            plans: Arc::new(InMemoryPlanRepository::new(self.plans)),
            activations: Arc::new(InMemoryActivationRepository::new(self.activations)),
            transactions: Arc::new(InMemoryTransactionRepository::new(self.transactions)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn embedded_seed_loads() {
        let catalog = WalletCatalog::embedded().unwrap();

        assert_eq!(catalog.categories.len(), 8);
        assert_eq!(catalog.companies.len(), 20);
        assert_eq!(catalog.plans.len(), 6);
        assert_eq!(catalog.activations.len(), 3);
        assert_eq!(catalog.transactions.len(), 10);

        let gym = catalog
            .activations
            .iter()
            .find(|activation| activation.plan_id == "sub-gym-monthly")
            .unwrap();
        assert_eq!(gym.renew_period_days, 30);
        assert_eq!(
            gym.expires_at,
            Utc.with_ymd_and_hms(2026, 2, 14, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn activation_of_unknown_plan_is_dropped() {
        let json = r#"{
            "plans": [
                {"id": "p1", "name": "P1", "price": 10, "priceLabel": "10 pts", "renewalPeriod": "week"}
            ],
            "activations": [
                {"planId": "p1", "activatedAt": "2026-01-01", "companyIds": []},
                {"planId": "ghost", "activatedAt": "2026-01-01", "companyIds": []}
            ]
        }"#;

        let catalog = WalletCatalog::from_json(json).unwrap();

        assert_eq!(catalog.activations.len(), 1);
        assert_eq!(catalog.activations[0].plan_id, "p1");
        assert_eq!(catalog.activations[0].renew_period_days, 7);
    }

    #[test]
    fn unknown_renewal_period_fails_the_load() {
        let json = r#"{
            "plans": [
                {"id": "p1", "name": "P1", "price": 10, "priceLabel": "10 pts", "renewalPeriod": "quarter"}
            ]
        }"#;

        let err = WalletCatalog::from_json(json).unwrap_err();

        assert!(matches!(
            err,
            CatalogError::UnknownRenewalPeriod { ref plan_id, .. } if plan_id == "p1"
        ));
    }

    #[test]
    fn oversized_period_fails_the_load() {
        let json = r#"{
            "plans": [
                {"id": "p1", "name": "P1", "price": 10, "priceLabel": "10 pts", "renewPeriodDays": 100000000}
            ],
            "activations": [
                {"planId": "p1", "activatedAt": "2026-01-01", "companyIds": []}
            ]
        }"#;

        let err = WalletCatalog::from_json(json).unwrap_err();

        assert!(matches!(
            err,
            CatalogError::PeriodOutOfRange { ref plan_id, renew_period_days: 100_000_000 }
                if plan_id == "p1"
        ));
    }

    #[test]
    fn accepts_legacy_section_names() {
        let json = r#"{
            "subscriptions": [
                {"id": "p1", "name": "P1", "price": 10, "priceLabel": "10 pts", "renewalPeriod": "day"}
            ],
            "activeSubscriptions": [
                {"subscriptionId": "p1", "activatedAt": "2026-01-01", "companyIds": ["a"]}
            ]
        }"#;

        let catalog = WalletCatalog::from_json(json).unwrap();

        assert_eq!(catalog.plans.len(), 1);
        assert_eq!(catalog.activations.len(), 1);
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = WalletCatalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::MalformedSeed(_)));
    }

    #[test]
    fn missing_seed_file_is_an_error() {
        let result = WalletCatalog::load(Some(Path::new("/nonexistent/seed.json")));
        assert!(result.is_err());
    }
}
