//! Product catalog domain module.
//!
//! This crate contains the record shapes the rest of the service moves
//! around, implemented purely as data (no IO, no HTTP, no storage).

pub mod product;

pub use product::{PriceUpdate, Product, ProductDraft, ProductId, ProductPatch};
