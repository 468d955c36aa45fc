use std::sync::Arc;

use tracing::{error, info, warn};

use crate::{repositories::document_store::StoreClient, settings::AppConfig};

pub mod memory;
pub mod mongo;

/// Builds the process-wide store client. Without a usable connection string
/// the client is disabled and the API serves empty results.
pub async fn create_store(config: &AppConfig) -> StoreClient {
    let Some(database_url) = config.database_url.as_deref() else {
        warn!("DATABASE_URL is not set; document store disabled");
        return StoreClient::disabled();
    };

    match mongo::MongoStore::connect(database_url, config.database_name.as_deref()).await {
        Ok(store) => {
            info!("Document store ready.");
            StoreClient::new(Arc::new(store))
        }
        Err(e) => {
            error!("Document store unavailable: {}", e);
            StoreClient::disabled()
        }
    }
}
