pub mod activations;
pub mod companies;
pub mod dashboard;
pub mod enums;
pub mod plans;
pub mod progress;
pub mod timestamps;
