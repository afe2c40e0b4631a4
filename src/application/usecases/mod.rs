pub mod dashboard;
pub mod subscription_history;
pub mod subscription_lifecycle;
pub mod subscription_progress;
pub mod wallet;
