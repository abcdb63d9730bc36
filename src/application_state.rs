use crate::consts::{
    DEFAULT_ENV_VAR_PREFIX, DEFAULT_GRPC_PORT, DEFAULT_MAX_CONCURRENT_CALLS, DEFAULT_MODEL_PATH,
};
use crate::model::errors::ModelError;
use crate::model::DecisionModel;
use crate::pb::flow_classifier_server::FlowClassifierServer;
use crate::service::FlowClassifierService;
use crate::settings::ClassifierSettings;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment};
use log::info;
use serde::Deserialize;
use std::net::{AddrParseError, SocketAddr};
use std::sync::Arc;
use tonic::transport::Server;

#[derive(Debug)]
pub enum ConfigErr {
    Read(config::ConfigError),
}

/// Failures before the server accepts its first call. All of them abort
/// the process; nothing is served.
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigErr),
    Model(ModelError),
    Address(AddrParseError),
    Transport(tonic::transport::Error),
}

impl From<ConfigErr> for StartupError {
    fn from(error: ConfigErr) -> StartupError {
        StartupError::Config(error)
    }
}

impl From<ModelError> for StartupError {
    fn from(error: ModelError) -> StartupError {
        StartupError::Model(error)
    }
}

impl From<AddrParseError> for StartupError {
    fn from(error: AddrParseError) -> StartupError {
        StartupError::Address(error)
    }
}

impl From<tonic::transport::Error> for StartupError {
    fn from(error: tonic::transport::Error) -> StartupError {
        StartupError::Transport(error)
    }
}

pub fn build_config() -> Result<Config, ConfigErr> {
    let base_config_builder = ConfigBuilder::<DefaultState>::default();
    base_config_builder
        .set_default("grpc_server_port", DEFAULT_GRPC_PORT as i64)
        .map_err(ConfigErr::Read)?
        .set_default("model_path", DEFAULT_MODEL_PATH)
        .map_err(ConfigErr::Read)?
        .set_default("max_concurrent_calls", DEFAULT_MAX_CONCURRENT_CALLS as i64)
        .map_err(ConfigErr::Read)?
        .add_source(Environment::with_prefix(DEFAULT_ENV_VAR_PREFIX).separator("__"))
        .build()
        .map_err(ConfigErr::Read)
}

pub fn get_config<'d, T: Deserialize<'d>>(config: &Config) -> Result<T, ConfigErr> {
    config.clone().try_deserialize().map_err(ConfigErr::Read)
}

pub struct ApplicationState {
    settings: ClassifierSettings,
    model: Arc<DecisionModel>,
}

impl ApplicationState {
    /// Ordered startup sequence: read configuration, then load the model.
    /// The model is deserialized exactly once here and shared read-only
    /// for the rest of the process lifetime.
    pub fn new() -> Result<Self, StartupError> {
        let config = build_config()?;

        // deserialize env config
        let settings = get_config::<ClassifierSettings>(&config)?;

        let model = Arc::new(DecisionModel::load(&settings.model_path)?);
        info!("loaded classification model from {}", settings.model_path);

        Ok(Self { settings, model })
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }

    /// Binds the port and serves until a termination signal arrives, then
    /// drains in-flight calls before returning.
    pub async fn serve(self) -> Result<(), StartupError> {
        let addr: SocketAddr = format!("0.0.0.0:{}", self.settings.grpc_server_port).parse()?;
        let service = FlowClassifierService::new(self.model.clone());

        info!("started listening on: {}", addr);

        Server::builder()
            .concurrency_limit_per_connection(self.settings.max_concurrent_calls)
            .add_service(FlowClassifierServer::new(service))
            .serve_with_shutdown(addr, shutdown_signal())
            .await?;

        info!("server drained, shutting down");

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("unable to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("unable to install sigterm handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("termination signal received, draining in-flight calls");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TreeNode;
    use serial_test::serial;
    use std::env;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn artifact_path(tag: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!(
            "classifier-state-{}-{}.bin",
            tag,
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos())
                .unwrap_or_default()
        ))
    }

    #[test]
    #[serial]
    fn test_startup_fails_without_model_artifact() {
        let path = artifact_path("absent");
        env::set_var("CLASSIFIER__MODEL_PATH", &path);

        let result = ApplicationState::new();
        env::remove_var("CLASSIFIER__MODEL_PATH");

        assert!(matches!(
            result,
            Err(StartupError::Model(ModelError::Io(_)))
        ));
    }

    #[test]
    #[serial]
    fn test_startup_loads_model_artifact() {
        let path = artifact_path("present");
        let model = DecisionModel::from_nodes(vec![TreeNode::Leaf { label: 0 }])
            .expect("tree is well formed");
        std::fs::write(&path, bincode::serialize(&model).expect("serialize model"))
            .expect("write artifact");

        env::set_var("CLASSIFIER__MODEL_PATH", &path);
        let state = ApplicationState::new().expect("startup succeeds");
        env::remove_var("CLASSIFIER__MODEL_PATH");

        assert_eq!(state.settings().model_path, path.to_string_lossy());

        let _ = std::fs::remove_file(path);
    }
}
