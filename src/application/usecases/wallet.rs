use std::sync::Arc;

use chrono::{DateTime, Months, Utc};
use tracing::debug;

use crate::application::usecases::subscription_progress::MS_PER_DAY;
use crate::domain::{
    entities::{
        categories::CategoryEntity, companies::CompanyEntity, plans::PlanEntity,
        transactions::TransactionEntity,
    },
    repositories::{
        categories::CategoryRepository, companies::CompanyRepository, plans::PlanRepository,
        transactions::TransactionRepository,
    },
    value_objects::{companies::ExpiringPointsNotice, enums::category_ids::CategoryId},
};

/// Share of the way to the next reward, 0 to 100.
pub fn reward_progress(company: &CompanyEntity) -> f64 {
    if company.points_per_reward == 0 {
        return 0.0;
    }
    let earned = f64::from(company.points_per_reward) - f64::from(company.points_to_next_reward);
    (earned / f64::from(company.points_per_reward) * 100.0).clamp(0.0, 100.0)
}

/// Partner points expire "soon" when their date falls within one calendar year of `now`.
/// Independent of subscription expiry.
pub fn is_expiring_soon(expiring_date: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    let Some(expiring_date) = expiring_date else {
        return false;
    };
    now.checked_add_months(Months::new(12))
        .is_some_and(|one_year_out| expiring_date <= one_year_out)
}

pub fn relative_date_label(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_days = (now - date).num_milliseconds().div_euclid(MS_PER_DAY);
    match diff_days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{diff_days} days ago"),
        _ => date.format("%Y-%m-%d").to_string(),
    }
}

/// Read queries behind the partner list, partner wallet page, marketplace and history pages.
pub struct WalletUseCase {
    company_repo: Arc<dyn CompanyRepository + Send + Sync>,
    category_repo: Arc<dyn CategoryRepository + Send + Sync>,
    plan_repo: Arc<dyn PlanRepository + Send + Sync>,
    transaction_repo: Arc<dyn TransactionRepository + Send + Sync>,
}

impl WalletUseCase {
    pub fn new(
        company_repo: Arc<dyn CompanyRepository + Send + Sync>,
        category_repo: Arc<dyn CategoryRepository + Send + Sync>,
        plan_repo: Arc<dyn PlanRepository + Send + Sync>,
        transaction_repo: Arc<dyn TransactionRepository + Send + Sync>,
    ) -> Self {
        Self {
            company_repo,
            category_repo,
            plan_repo,
            transaction_repo,
        }
    }

    pub fn total_balance(&self) -> u64 {
        self.company_repo
            .list_companies()
            .iter()
            .map(|company| u64::from(company.balance))
            .sum()
    }

    pub fn company_by_id(&self, company_id: &str) -> Option<CompanyEntity> {
        self.company_repo.find_by_id(company_id)
    }

    pub fn categories(&self) -> Vec<CategoryEntity> {
        self.category_repo.list_categories()
    }

    pub fn category_by_id(&self, category_id: CategoryId) -> Option<CategoryEntity> {
        self.category_repo.find_by_id(category_id)
    }

    pub fn companies_by_category(&self, category_id: Option<CategoryId>) -> Vec<CompanyEntity> {
        let companies = self.company_repo.list_companies();
        match category_id {
            Some(category_id) => companies
                .into_iter()
                .filter(|company| company.category_id == category_id)
                .collect(),
            None => companies,
        }
    }

    /// Category filter first, then a case-insensitive name match. A blank query matches all.
    pub fn companies_by_search(
        &self,
        query: &str,
        category_id: Option<CategoryId>,
    ) -> Vec<CompanyEntity> {
        let filtered = self.companies_by_category(category_id);
        let query = query.trim();
        if query.is_empty() {
            return filtered;
        }

        let needle = query.to_lowercase();
        let matches: Vec<CompanyEntity> = filtered
            .into_iter()
            .filter(|company| company.name.to_lowercase().contains(&needle))
            .collect();
        debug!(
            query,
            category = ?category_id,
            matches = matches.len(),
            "wallet: partner search"
        );
        matches
    }

    pub fn transactions_by_company(&self, company_id: &str) -> Vec<TransactionEntity> {
        self.transaction_repo
            .list_transactions()
            .into_iter()
            .filter(|transaction| transaction.company_id == company_id)
            .collect()
    }

    /// All transactions, newest first.
    pub fn transaction_history(&self) -> Vec<TransactionEntity> {
        let mut transactions = self.transaction_repo.list_transactions();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    pub fn plan_by_id(&self, plan_id: &str) -> Option<PlanEntity> {
        self.plan_repo.find_by_id(plan_id)
    }

    /// Plans tied to the partner directly or through the partner's category.
    pub fn plans_by_company(&self, company_id: &str) -> Vec<PlanEntity> {
        let company_category = self
            .company_repo
            .find_by_id(company_id)
            .map(|company| company.category_id);

        self.plan_repo
            .list_plans()
            .into_iter()
            .filter(|plan| {
                plan.company_id.as_deref() == Some(company_id)
                    || (plan.category_id.is_some() && plan.category_id == company_category)
            })
            .collect()
    }

    /// With a category: plans in that category plus every plan not tied to one partner.
    pub fn plans_for_marketplace(&self, category_id: Option<CategoryId>) -> Vec<PlanEntity> {
        let plans = self.plan_repo.list_plans();
        let Some(category_id) = category_id else {
            return plans;
        };
        plans
            .into_iter()
            .filter(|plan| plan.category_id == Some(category_id) || plan.company_id.is_none())
            .collect()
    }

    pub fn expiring_points_notice(
        &self,
        company: &CompanyEntity,
        now: DateTime<Utc>,
    ) -> Option<ExpiringPointsNotice> {
        let points = company.expiring_points.filter(|points| *points > 0)?;
        let expires_at = company.expiring_date?;
        if !is_expiring_soon(Some(expires_at), now) {
            return None;
        }
        Some(ExpiringPointsNotice {
            company_id: company.id.clone(),
            points,
            expires_at,
        })
    }
}
