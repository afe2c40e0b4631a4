#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServiceContext {
    pub(crate) service_name: String,
    pub(crate) environment: String,
    pub(crate) component: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ObservabilityConfig {
    pub(crate) service_context: ServiceContext,
    /// Filter directive used when `RUST_LOG` is unset or unparsable.
    pub(crate) default_directive: String,
}

impl ObservabilityConfig {
    pub(crate) fn from_env(component: &str) -> Self {
        Self::from_lookup(component, |key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(component: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_string = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let component = component.trim().to_string();

        let service_name = env_string("SERVICE_NAME").unwrap_or_else(|| component.clone());

        let environment = env_string("STAGE").unwrap_or_else(|| "unknown".to_string());

        let default_directive = env_string("LOG_LEVEL").unwrap_or_else(|| "info".to_string());

        Self {
            service_context: ServiceContext {
                service_name,
                environment,
                component,
            },
            default_directive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_component_and_unknown_stage() {
        let config = ObservabilityConfig::from_lookup(" wallet ", |_| None);

        assert_eq!(
            config.service_context,
            ServiceContext {
                service_name: "wallet".to_string(),
                environment: "unknown".to_string(),
                component: "wallet".to_string(),
            }
        );
        assert_eq!(config.default_directive, "info");
    }

    #[test]
    fn reads_service_name_stage_and_level() {
        let config = ObservabilityConfig::from_lookup("wallet", |key| match key {
            "SERVICE_NAME" => Some("loyalty-twa".to_string()),
            "STAGE" => Some("production".to_string()),
            "LOG_LEVEL" => Some("debug".to_string()),
            _ => None,
        });

        assert_eq!(config.service_context.service_name, "loyalty-twa");
        assert_eq!(config.service_context.environment, "production");
        assert_eq!(config.default_directive, "debug");
    }
}
