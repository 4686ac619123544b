//! Service wiring: store backend selection plus the two core components.

use std::sync::Arc;

use stockroom_export::Exporter;
use stockroom_infra::{InMemoryRecordStore, RecordStore};
use stockroom_pricing::BulkPriceUpdater;

/// Shared per-process services, injected into handlers via `Extension`.
pub struct AppServices {
    pub store: Arc<dyn RecordStore>,
    pub updater: BulkPriceUpdater<Arc<dyn RecordStore>>,
    pub exporter: Exporter<Arc<dyn RecordStore>>,
}

impl AppServices {
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            updater: BulkPriceUpdater::new(store.clone()),
            exporter: Exporter::new(store.clone()),
            store,
        }
    }
}

/// Build services for this process.
///
/// Defaults to the in-memory backend. With the `postgres` feature compiled
/// in and `DATABASE_URL` set, uses Postgres instead; a store that cannot be
/// reached at startup falls back to in-memory with a warning rather than
/// aborting the process.
pub async fn build_services() -> AppServices {
    #[cfg(feature = "postgres")]
    if let Ok(url) = std::env::var("DATABASE_URL") {
        match stockroom_infra::PostgresRecordStore::connect(&url).await {
            Ok(store) => {
                tracing::info!("using postgres record store");
                return AppServices::with_store(Arc::new(store));
            }
            Err(e) => {
                tracing::warn!(error = %e, "postgres unavailable; falling back to in-memory store");
            }
        }
    }

    tracing::info!("using in-memory record store");
    AppServices::with_store(Arc::new(InMemoryRecordStore::new()))
}
