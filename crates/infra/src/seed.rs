//! Demo-data seeding.

use stockroom_catalog::ProductDraft;
use stockroom_core::StoreError;

use crate::record_store::RecordStore;

/// The demo catalog.
fn sample_products() -> Vec<ProductDraft> {
    let rows = [
        ("Samsung", 10000.0, 50),
        ("I phone", 16000.0, 30),
        ("Nokia", 70000.0, 75),
        ("poco", 120000.0, 40),
        ("realme", 900000.0, 60),
    ];

    rows.into_iter()
        .map(|(name, price, quantity)| ProductDraft {
            name: name.to_string(),
            price,
            quantity,
        })
        .collect()
}

/// Insert the demo catalog; the store assigns the ids. Returns how many
/// records were inserted.
pub async fn seed_sample_products(store: &dyn RecordStore) -> Result<u64, StoreError> {
    let mut inserted = 0u64;
    for draft in sample_products() {
        store.create(draft).await?;
        inserted += 1;
    }

    tracing::info!(inserted, "sample products seeded");
    Ok(inserted)
}
