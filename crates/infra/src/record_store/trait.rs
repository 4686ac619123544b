use std::sync::Arc;

use async_trait::async_trait;

use stockroom_catalog::{Product, ProductDraft, ProductId, ProductPatch};
use stockroom_core::{Pagination, StoreError};

/// Persistence seam for product records.
///
/// Implementations own every consistency concern; callers treat the store
/// as opaque and hold no locks of their own. Natural order is ascending id
/// on every backend, which keeps offset pagination deterministic.
///
/// ## Contract
///
/// - `create` assigns the next id; ids are never reused or reassigned.
/// - `find_by_id` reports a missing record as `Ok(None)`, not as an error.
/// - `update`, `patch`, and `delete` address exactly one record and fail
///   with [`StoreError::NotFound`] when the id is absent.
/// - `find_page` fetches one bounded page and never scans past its limit.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new record under the next id.
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;

    /// Number of records currently stored.
    async fn count(&self) -> Result<u64, StoreError>;

    /// Every record, in natural order.
    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    /// Point lookup. `Ok(None)` when the id is unknown.
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// One bounded page, in natural order.
    async fn find_page(&self, page: Pagination) -> Result<Vec<Product>, StoreError>;

    /// Replace the record addressed by `product.id`.
    async fn update(&self, product: &Product) -> Result<(), StoreError>;

    /// Apply the set fields of `patch` to one record.
    async fn patch(&self, id: ProductId, patch: ProductPatch) -> Result<(), StoreError>;

    /// Apply the set fields of `patch` to every record; returns how many
    /// records were touched.
    async fn patch_all(&self, patch: &ProductPatch) -> Result<u64, StoreError>;

    /// Remove the record.
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        (**self).create(draft).await
    }

    async fn count(&self) -> Result<u64, StoreError> {
        (**self).count().await
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<Product>, StoreError> {
        (**self).find_page(page).await
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        (**self).update(product).await
    }

    async fn patch(&self, id: ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        (**self).patch(id, patch).await
    }

    async fn patch_all(&self, patch: &ProductPatch) -> Result<u64, StoreError> {
        (**self).patch_all(patch).await
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}
