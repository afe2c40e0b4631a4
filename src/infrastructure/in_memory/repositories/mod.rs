pub mod activations;
pub mod categories;
pub mod companies;
pub mod plans;
pub mod transactions;
