use crate::domain::{
    entities::transactions::TransactionEntity, repositories::transactions::TransactionRepository,
};

pub struct InMemoryTransactionRepository {
    transactions: Vec<TransactionEntity>,
}

impl InMemoryTransactionRepository {
    pub fn new(transactions: Vec<TransactionEntity>) -> Self {
        Self { transactions }
    }
}

impl TransactionRepository for InMemoryTransactionRepository {
    fn list_transactions(&self) -> Vec<TransactionEntity> {
        self.transactions.clone()
    }
}
