//! Paginated export of product records.
//!
//! One bounded page per request, rendered as a JSON array or a CSV table.
//! Nothing is cached; every export is recomputed from the store.

pub mod csv;
pub mod exporter;

pub use exporter::{ExportDocument, ExportError, ExportFormat, Exporter, PAGE_SIZE};
