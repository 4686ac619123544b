//! Record store boundary.
//!
//! This module defines the persistence seam for product records without
//! making any storage assumptions: an in-memory backend for tests/dev and a
//! Postgres backend (behind the `postgres` feature) for deployments.

pub mod in_memory;
pub mod r#trait;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use in_memory::InMemoryRecordStore;
pub use r#trait::RecordStore;

#[cfg(feature = "postgres")]
pub use postgres::PostgresRecordStore;
