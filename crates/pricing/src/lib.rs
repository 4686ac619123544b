//! Batched price updates against the record store.

pub mod updater;

pub use updater::{BulkPriceUpdater, PriceUpdateSummary};
