use stockroom_catalog::PriceUpdate;
use stockroom_core::StoreError;
use stockroom_infra::RecordStore;

/// Outcome of one price-update batch.
///
/// The applied count is the only detail callers get; there is no per-id
/// success/failure list in this contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceUpdateSummary {
    /// Number of batch entries that resulted in an actual store write.
    pub applied: u64,
}

/// Applies price-update batches against a record store.
///
/// Entries are processed strictly in sequence order, one read and one write
/// each. An unknown id is skipped without error and without counting. When
/// the same id appears more than once, the later entry determines the final
/// price. The first store-level failure aborts the remainder of the batch;
/// entries already written stay written.
#[derive(Debug, Clone)]
pub struct BulkPriceUpdater<S> {
    store: S,
}

impl<S: RecordStore> BulkPriceUpdater<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Apply `updates` in order and report how many records were written.
    pub async fn apply(&self, updates: &[PriceUpdate]) -> Result<PriceUpdateSummary, StoreError> {
        let mut applied = 0u64;

        for update in updates {
            let Some(mut product) = self.store.find_by_id(update.id).await? else {
                tracing::debug!(id = %update.id, "price update for unknown id skipped");
                continue;
            };

            product.price = update.new_price;
            self.store.update(&product).await?;
            applied += 1;
        }

        Ok(PriceUpdateSummary { applied })
    }
}
