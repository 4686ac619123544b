//! `stockroom-core` — shared service primitives.
//!
//! This crate contains the small set of types every other crate agrees on
//! (no IO, no HTTP).

pub mod error;
pub mod pagination;

pub use error::{StoreError, StoreResult};
pub use pagination::Pagination;
