// Application state shared by every handler

use std::sync::Arc;
use crate::config::environment::EnvironmentVariables;
use crate::config::mongo::MongoConfig;
use crate::database::MongoService;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub mongo: MongoService,
}

impl AppState {
    /// Builds the state from already-loaded configuration.
    /// The MongoDB client is created later by `init_services`.
    pub fn new(environment: EnvironmentVariables, mongo_config: MongoConfig) -> Self {
        let environment_arc: Arc<EnvironmentVariables> = Arc::new(environment);
        let mongo: MongoService = MongoService::new(mongo_config, environment_arc.clone());

        Self {
            environment: environment_arc,
            mongo,
        }
    }

    /// Loads the service and MongoDB configuration from the environment.
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: EnvironmentVariables = EnvironmentVariables::load()?;
        let mongo_config: MongoConfig = MongoConfig::from_env()?;

        Ok(Self::new(environment, mongo_config))
    }

    /// Creates the MongoDB client; any failure is fatal for the caller
    pub async fn init_services(&self) -> anyhow::Result<()> {
        self.mongo.initialize().await?;

        tracing::info!("Services initialized successfully");
        Ok(())
    }

    pub async fn shutdown(&self) {
        self.mongo.shutdown().await;
    }
}
