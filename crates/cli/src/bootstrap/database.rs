use custom_dns_application::ports::RecordStore;
use custom_dns_domain::config::{StoreConfig, StoreKind};
use custom_dns_infrastructure::database::create_pool;
use custom_dns_infrastructure::repositories::{InMemoryRecordStore, SqliteRecordStore};
use std::sync::Arc;
use tracing::{error, info, warn};

pub async fn init_store(cfg: &StoreConfig) -> anyhow::Result<Arc<dyn RecordStore>> {
    match cfg.kind {
        StoreKind::Memory => {
            warn!("Using in-memory record store; records are lost on restart");
            Ok(Arc::new(InMemoryRecordStore::new()))
        }
        StoreKind::Sqlite => {
            let database_url = cfg.database_url();
            info!("Initializing database: {}", database_url);

            let pool = create_pool(&database_url, cfg.max_connections)
                .await
                .map_err(|e| {
                    error!("Failed to initialize database: {}", e);
                    anyhow::anyhow!(e)
                })?;

            info!(
                "Database initialized successfully (max_connections={})",
                cfg.max_connections
            );
            Ok(Arc::new(SqliteRecordStore::new(pool)))
        }
    }
}
