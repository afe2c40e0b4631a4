use mockall::automock;

use crate::domain::entities::transactions::TransactionEntity;

#[automock]
pub trait TransactionRepository {
    fn list_transactions(&self) -> Vec<TransactionEntity>;
}
