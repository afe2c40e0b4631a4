use serde::{Deserialize, Serialize};

use crate::domain::errors::CatalogError;
use crate::domain::value_objects::{
    enums::category_ids::CategoryId, plans::resolve_renewal_period_days,
};

/// Plan definition as it appears in the seed. The period may be named, explicit, or both.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: u32,
    pub price_label: String,
    pub renewal_period: Option<String>,
    pub renew_period_days: Option<u32>,
    #[serde(default)]
    pub renewal_label: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub company_id: Option<String>,
    pub category_id: Option<CategoryId>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub price_label: String,
    pub renewal_period_days: u32,
    pub renewal_label: String,
    pub benefits: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl TryFrom<PlanRow> for PlanEntity {
    type Error = CatalogError;

    fn try_from(value: PlanRow) -> Result<Self, Self::Error> {
        let renewal_period_days = resolve_renewal_period_days(
            &value.id,
            value.renewal_period.as_deref(),
            value.renew_period_days,
        )?;

        Ok(Self {
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            price_label: value.price_label,
            renewal_period_days,
            renewal_label: value.renewal_label,
            benefits: value.benefits,
            company_id: value.company_id,
            category_id: value.category_id,
            image: value.image,
        })
    }
}
