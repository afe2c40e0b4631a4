use mockall::automock;

use crate::domain::entities::plans::PlanEntity;

#[automock]
pub trait PlanRepository {
    fn find_by_id(&self, plan_id: &str) -> Option<PlanEntity>;
    fn list_plans(&self) -> Vec<PlanEntity>;
}
