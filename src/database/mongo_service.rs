// =============================================================================
// MONGO SERVICE - Client creation from environment configuration
// =============================================================================

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use anyhow::{Context, Result};
use bson::doc;
use mongodb::{options::ClientOptions, Client, Database};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::config::environment::EnvironmentVariables;
use crate::config::mongo::MongoConfig;

// =============================================================================
// CLIENT FACTORY
// =============================================================================

/// Turns a connection string into a live client handle.
pub trait ClientFactory {
    type Client;

    fn connect(&self, uri: &str) -> impl Future<Output = Result<Self::Client>> + Send;
}

/// Factory backed by the official MongoDB driver.
#[derive(Clone, Copy, Debug, Default)]
pub struct DriverClientFactory;

impl ClientFactory for DriverClientFactory {
    type Client = Client;

    async fn connect(&self, uri: &str) -> Result<Client> {
        let options: ClientOptions = ClientOptions::parse(uri)
            .await
            .context("Failed to parse MongoDB connection string")?;

        Client::with_options(options).context("Failed to create MongoDB client")
    }
}

/// Resolves the connection string for `config` and hands it to `factory`.
/// Errors are not retried; they go straight back to the caller.
pub async fn create_client<F: ClientFactory>(
    config: &MongoConfig,
    factory: &F,
    deadline: Duration,
) -> Result<F::Client> {
    let uri: String = config.connection_string();

    debug!(mode = ?config.mode, host = %config.host, "Creating MongoDB client");

    tokio::time::timeout(deadline, factory.connect(&uri))
        .await
        .with_context(|| format!("Timed out after {deadline:?} creating MongoDB client"))?
}

/// Creates a driver client straight from a connection string.
pub async fn new_client(uri: &str, deadline: Duration) -> Result<Client> {
    tokio::time::timeout(deadline, DriverClientFactory.connect(uri))
        .await
        .with_context(|| format!("Timed out after {deadline:?} creating MongoDB client"))?
}

// =============================================================================
// MONGO SERVICE
// =============================================================================

/// Owns the MongoDB client for the application.
/// The client is not created until `initialize()` is called.
#[derive(Clone, Debug)]
pub struct MongoService {
    client: Arc<OnceCell<Client>>,
    config: Arc<MongoConfig>,
    environment: Arc<EnvironmentVariables>,
}

impl MongoService {
    pub fn new(config: MongoConfig, environment: Arc<EnvironmentVariables>) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            config: Arc::new(config),
            environment,
        }
    }

    /// Creates the client and verifies the server answers a ping.
    pub async fn initialize(&self) -> Result<()> {
        info!("Initializing MongoService ({:?} mode)...", self.config.mode);

        self.client.get_or_try_init(|| async {
            create_client(&self.config, &DriverClientFactory, self.connect_timeout()).await
        }).await?;

        self.ping().await?;

        info!("MongoDB connection established successfully");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.client.initialized()
    }

    /// Errors if the client has not been initialized.
    pub fn get_client(&self) -> Result<&Client> {
        self.client.get().ok_or_else(|| anyhow::anyhow!("MongoDB client not initialized"))
    }

    /// The configured default database.
    pub fn database(&self) -> Result<Database> {
        Ok(self.get_client()?.database(&self.environment.mongo_database))
    }

    pub fn config(&self) -> &MongoConfig {
        &self.config
    }

    pub async fn ping(&self) -> Result<()> {
        let database: Database = self.database()?;
        let deadline: Duration = self.connect_timeout();

        tokio::time::timeout(deadline, database.run_command(doc! { "ping": 1 }, None))
            .await
            .with_context(|| format!("MongoDB ping timed out after {deadline:?}"))?
            .context("Failed to ping MongoDB")?;

        Ok(())
    }

    pub async fn shutdown(&self) {
        // The driver closes its pooled connections when the last handle drops.
        if self.is_initialized() {
            info!("MongoService shutdown, client released");
        } else {
            debug!("MongoDB client was not initialized, nothing to close");
        }
    }

    fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.environment.mongo_connect_timeout_seconds)
    }
}
