pub mod activation_statuses;
pub mod category_ids;
pub mod renewal_periods;
pub mod transaction_statuses;
pub mod transaction_types;
