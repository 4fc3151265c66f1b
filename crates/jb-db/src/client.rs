//! Store connection management
//!
//! Wraps the MongoDB client handle. The driver connects lazily; `ping` is
//! the way to find out whether the store is actually reachable.

use std::time::Duration;

use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use crate::job::Job;
use crate::mongo::MongoJobStore;
use crate::store::{StoreError, StoreResult};

/// Store connection configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection URI
    pub uri: String,
    /// Database name
    pub database: String,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
    /// Server selection timeout in seconds
    pub selection_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: "jobboard".to_string(),
            connect_timeout_secs: 10,
            selection_timeout_secs: 5,
        }
    }
}

impl StoreConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        Self {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database: std::env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "jobboard".to_string()),
            connect_timeout_secs: std::env::var("STORE_CONNECT_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
            selection_timeout_secs: std::env::var("STORE_SELECTION_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }

    /// Create config with a specific URI and database
    pub fn with_uri(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            ..Default::default()
        }
    }
}

/// Handle to the document store
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Create a new store handle
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        options.app_name = Some("jobboard-rs".to_string());
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        options.server_selection_timeout =
            Some(Duration::from_secs(config.selection_timeout_secs));

        let client =
            Client::with_options(options).map_err(|e| StoreError::Unavailable(e.to_string()))?;
        let db = client.database(&config.database);

        tracing::info!("Store client created for database {}", config.database);

        Ok(Self { db })
    }

    /// Get the underlying database handle
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Check if the store is reachable
    pub async fn ping(&self) -> StoreResult<()> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }

    /// Job collection access
    pub fn jobs(&self) -> MongoJobStore {
        MongoJobStore::new(self.db.collection::<Job>("jobs"))
    }
}
