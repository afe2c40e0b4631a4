use mockall::automock;

use crate::domain::entities::activations::ActivationEntity;

#[automock]
pub trait ActivationRepository {
    /// Every resolvable activation, in ledger order.
    fn list_activations(&self) -> Vec<ActivationEntity>;
}
