use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ClassifierSettings {
    pub grpc_server_port: u16,
    pub model_path: String,
    pub max_concurrent_calls: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_state::{build_config, get_config};
    use crate::consts::{DEFAULT_GRPC_PORT, DEFAULT_MAX_CONCURRENT_CALLS, DEFAULT_MODEL_PATH};
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::env;

    const ENV_VARS: [&str; 3] = [
        "CLASSIFIER__GRPC_SERVER_PORT",
        "CLASSIFIER__MODEL_PATH",
        "CLASSIFIER__MAX_CONCURRENT_CALLS",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_apply_without_env() {
        clear_env();

        let config = build_config().expect("unable to build config");
        let settings = get_config::<ClassifierSettings>(&config).expect("unable to deserialize");

        assert_eq!(
            settings,
            ClassifierSettings {
                grpc_server_port: DEFAULT_GRPC_PORT,
                model_path: DEFAULT_MODEL_PATH.to_string(),
                max_concurrent_calls: DEFAULT_MAX_CONCURRENT_CALLS,
            }
        );
    }

    #[test]
    #[serial]
    fn test_env_overrides_defaults() {
        env::set_var("CLASSIFIER__GRPC_SERVER_PORT", "6000");
        env::set_var("CLASSIFIER__MODEL_PATH", "/models/custom.model");
        env::set_var("CLASSIFIER__MAX_CONCURRENT_CALLS", "32");

        let config = build_config().expect("unable to build config");
        let settings = get_config::<ClassifierSettings>(&config).expect("unable to deserialize");

        clear_env();

        assert_eq!(
            settings,
            ClassifierSettings {
                grpc_server_port: 6000,
                model_path: "/models/custom.model".to_string(),
                max_concurrent_calls: 32,
            }
        );
    }

    #[test]
    #[serial]
    fn test_partial_env_keeps_remaining_defaults() {
        clear_env();
        env::set_var("CLASSIFIER__GRPC_SERVER_PORT", "50052");

        let config = build_config().expect("unable to build config");
        let settings = get_config::<ClassifierSettings>(&config).expect("unable to deserialize");

        clear_env();

        assert_eq!(settings.grpc_server_port, 50052);
        assert_eq!(settings.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(settings.max_concurrent_calls, DEFAULT_MAX_CONCURRENT_CALLS);
    }
}
