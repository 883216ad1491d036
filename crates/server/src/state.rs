use crate::config::ServerConfig;
use crate::error::ServerResult;
use peerconnect::{Engine, PeerConnectConfig};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Profile store and matching service (shared across requests)
    pub engine: Engine,
}

impl ServerState {
    /// Create new server state, building the engine from the configured YAML
    /// file when one is set.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let mut engine_config = match &config.engine_config {
            Some(path) => PeerConnectConfig::from_file(path)
                .map_err(peerconnect::EngineError::from)?,
            None => PeerConnectConfig::default(),
        };
        if let Some(seed) = config.seed_demo {
            engine_config.store.seed_demo = seed;
        }

        let engine = Engine::from_config(&engine_config)?;

        Ok(Self {
            config: Arc::new(config),
            engine,
        })
    }

    /// State around an existing engine.
    pub fn with_engine(config: ServerConfig, engine: Engine) -> Self {
        Self {
            config: Arc::new(config),
            engine,
        }
    }
}

/// Server metadata for health checks
#[derive(Debug, serde::Serialize)]
pub struct ServerMetadata {
    pub version: String,
    pub uptime_seconds: u64,
    pub profiles: usize,
}
