use crate::domain::{
    entities::activations::ActivationEntity, repositories::activations::ActivationRepository,
};

pub struct InMemoryActivationRepository {
    activations: Vec<ActivationEntity>,
}

impl InMemoryActivationRepository {
    pub fn new(activations: Vec<ActivationEntity>) -> Self {
        Self { activations }
    }
}

impl ActivationRepository for InMemoryActivationRepository {
    fn list_activations(&self) -> Vec<ActivationEntity> {
        self.activations.clone()
    }
}
