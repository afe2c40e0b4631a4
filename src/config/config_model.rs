use std::path::PathBuf;

use crate::config::stage::Stage;

#[derive(Debug, Clone)]
pub struct DotEnvyConfig {
    pub service: Service,
    pub seed: Seed,
    pub preview: Preview,
}

#[derive(Debug, Clone)]
pub struct Service {
    pub name: String,
    pub stage: Stage,
}

#[derive(Debug, Clone)]
pub struct Seed {
    /// `None` means the embedded snapshot.
    pub path: Option<PathBuf>,
}

/// How many items the home dashboard shows before "see all".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview {
    pub loyalty_cards: usize,
    pub active_subscriptions: usize,
}

impl Default for Preview {
    fn default() -> Self {
        Self {
            loyalty_cards: 4,
            active_subscriptions: 3,
        }
    }
}
