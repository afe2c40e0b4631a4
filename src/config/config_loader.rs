use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{
    config_model::{DotEnvyConfig, Preview, Seed, Service},
    stage::Stage,
};

pub fn load() -> Result<DotEnvyConfig> {
    dotenvy::dotenv().ok();

    load_from(|key| std::env::var(key).ok())
}

/// Builds the config from any key lookup. `load` passes the process environment.
pub fn load_from<F>(lookup: F) -> Result<DotEnvyConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let stage = match value("STAGE") {
        Some(raw) => Stage::try_from(&raw)?,
        None => Stage::default(),
    };

    let service = Service {
        name: value("SERVICE_NAME").unwrap_or_else(|| "loyalty-wallet".to_string()),
        stage,
    };

    let seed = Seed {
        path: value("WALLET_SEED_PATH").map(PathBuf::from),
    };

    let defaults = Preview::default();
    let preview = Preview {
        loyalty_cards: match value("WALLET_CARDS_PREVIEW_LIMIT") {
            Some(raw) => raw
                .parse()
                .context("WALLET_CARDS_PREVIEW_LIMIT is invalid")?,
            None => defaults.loyalty_cards,
        },
        active_subscriptions: match value("WALLET_SUBSCRIPTIONS_PREVIEW_LIMIT") {
            Some(raw) => raw
                .parse()
                .context("WALLET_SUBSCRIPTIONS_PREVIEW_LIMIT is invalid")?,
            None => defaults.active_subscriptions,
        },
    };

    Ok(DotEnvyConfig {
        service,
        seed,
        preview,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = load_from(lookup(&[])).unwrap();

        assert_eq!(config.service.name, "loyalty-wallet");
        assert_eq!(config.service.stage, Stage::Local);
        assert!(config.seed.path.is_none());
        assert_eq!(config.preview, Preview::default());
    }

    #[test]
    fn reads_every_key() {
        let config = load_from(lookup(&[
            ("STAGE", "production"),
            ("SERVICE_NAME", "wallet-twa"),
            ("WALLET_SEED_PATH", "/srv/wallet/seed.json"),
            ("WALLET_CARDS_PREVIEW_LIMIT", "6"),
            ("WALLET_SUBSCRIPTIONS_PREVIEW_LIMIT", " 2 "),
        ]))
        .unwrap();

        assert_eq!(config.service.name, "wallet-twa");
        assert_eq!(config.service.stage, Stage::Production);
        assert_eq!(
            config.seed.path.as_deref(),
            Some(std::path::Path::new("/srv/wallet/seed.json"))
        );
        assert_eq!(config.preview.loyalty_cards, 6);
        assert_eq!(config.preview.active_subscriptions, 2);
    }

    #[test]
    fn invalid_limit_is_an_error() {
        let err = load_from(lookup(&[("WALLET_CARDS_PREVIEW_LIMIT", "four")])).unwrap_err();
        assert!(err.to_string().contains("WALLET_CARDS_PREVIEW_LIMIT"));
    }

    #[test]
    fn invalid_stage_is_an_error() {
        assert!(load_from(lookup(&[("STAGE", "staging")])).is_err());
    }
}
