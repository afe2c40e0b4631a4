use crate::domain::{entities::plans::PlanEntity, repositories::plans::PlanRepository};

pub struct InMemoryPlanRepository {
    plans: Vec<PlanEntity>,
}

impl InMemoryPlanRepository {
    pub fn new(plans: Vec<PlanEntity>) -> Self {
        Self { plans }
    }
}

impl PlanRepository for InMemoryPlanRepository {
    fn find_by_id(&self, plan_id: &str) -> Option<PlanEntity> {
        self.plans.iter().find(|plan| plan.id == plan_id).cloned()
    }

    fn list_plans(&self) -> Vec<PlanEntity> {
        self.plans.clone()
    }
}
