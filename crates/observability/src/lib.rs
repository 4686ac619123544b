//! Shared observability setup (tracing/logging).

/// Tracing configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide observability.
///
/// Safe to call more than once; later calls become no-ops.
pub fn init() {
    tracing::init();
}
