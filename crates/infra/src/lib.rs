//! Infrastructure layer: record storage backends and demo-data seeding.

pub mod record_store;
pub mod seed;

pub use record_store::{InMemoryRecordStore, RecordStore};

#[cfg(feature = "postgres")]
pub use record_store::PostgresRecordStore;
