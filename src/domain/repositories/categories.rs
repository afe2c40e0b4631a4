use mockall::automock;

use crate::domain::entities::categories::CategoryEntity;
use crate::domain::value_objects::enums::category_ids::CategoryId;

#[automock]
pub trait CategoryRepository {
    fn find_by_id(&self, category_id: CategoryId) -> Option<CategoryEntity>;
    fn list_categories(&self) -> Vec<CategoryEntity>;
}
