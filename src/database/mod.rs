pub mod schema;

use crate::config::BootstrapConfig;
use crate::utils::error::BootstrapError;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection, Database};

/// MongoDB connection owned by a single bootstrap run.
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(config: &BootstrapConfig) -> Result<Self, BootstrapError> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // One-shot run: a single short-lived connection is enough
        client_options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        client_options.max_pool_size = Some(1);
        client_options.connect_timeout = Some(config.timeout);
        client_options.server_selection_timeout = Some(config.timeout);

        let client = Client::with_options(client_options)?;
        let db = client.database(&config.database);

        // Test connection
        db.list_collection_names().await?;

        Ok(Self { client, db })
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Release the connection once the run is over.
    pub async fn close(self) {
        self.client.shutdown().await;
    }
}
