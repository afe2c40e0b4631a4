use crate::domain::{
    entities::categories::CategoryEntity, repositories::categories::CategoryRepository,
    value_objects::enums::category_ids::CategoryId,
};

pub struct InMemoryCategoryRepository {
    categories: Vec<CategoryEntity>,
}

impl InMemoryCategoryRepository {
    pub fn new(categories: Vec<CategoryEntity>) -> Self {
        Self { categories }
    }
}

impl CategoryRepository for InMemoryCategoryRepository {
    fn find_by_id(&self, category_id: CategoryId) -> Option<CategoryEntity> {
        self.categories
            .iter()
            .find(|category| category.id == category_id)
            .cloned()
    }

    fn list_categories(&self) -> Vec<CategoryEntity> {
        self.categories.clone()
    }
}
