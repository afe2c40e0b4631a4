use serde::{Deserialize, Serialize};

use crate::domain::value_objects::enums::category_ids::CategoryId;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryEntity {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}
