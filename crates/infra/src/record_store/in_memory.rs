use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use stockroom_catalog::{Product, ProductDraft, ProductId, ProductPatch};
use stockroom_core::{Pagination, StoreError};

use super::r#trait::RecordStore;

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory record store.
///
/// The default backend, and the test double. BTreeMap iteration gives the
/// ascending-id natural order the trait requires. Not optimized for
/// performance.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    inner: RwLock<Inner>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> StoreError {
    StoreError::unavailable("lock poisoned")
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        inner.last_id += 1;
        let id = ProductId::new(inner.last_id);
        let product = draft.into_product(id);
        inner.records.insert(id, product.clone());

        Ok(product)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.records.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.records.values().cloned().collect())
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner.records.get(&id).cloned())
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| poisoned())?;
        Ok(inner
            .records
            .values()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        match inner.records.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn patch(&self, id: ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        match inner.records.get_mut(&id) {
            Some(record) => {
                patch.apply_to(record);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn patch_all(&self, patch: &ProductPatch) -> Result<u64, StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;

        let mut touched = 0u64;
        for record in inner.records.values_mut() {
            patch.apply_to(record);
            touched += 1;
        }

        Ok(touched)
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| poisoned())?;
        match inner.records.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, price: f64, quantity: i64) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            price,
            quantity,
        }
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let store = InMemoryRecordStore::new();

        let first = store.create(draft("Samsung", 10000.0, 50)).await.unwrap();
        let second = store.create(draft("Nokia", 70000.0, 75)).await.unwrap();

        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(second.id, ProductId::new(2));
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryRecordStore::new();

        let first = store.create(draft("Samsung", 10000.0, 50)).await.unwrap();
        store.delete(first.id).await.unwrap();

        let second = store.create(draft("Nokia", 70000.0, 75)).await.unwrap();
        assert_eq!(second.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn find_page_respects_limit_and_offset() {
        let store = InMemoryRecordStore::new();
        for n in 0..7 {
            store.create(draft(&format!("p{n}"), 1.0, 1)).await.unwrap();
        }

        let page = store
            .find_page(Pagination {
                limit: 3,
                offset: 5,
            })
            .await
            .unwrap();

        let ids: Vec<i64> = page.iter().map(|p| p.id.as_i64()).collect();
        assert_eq!(ids, vec![6, 7]);
    }

    #[tokio::test]
    async fn find_page_beyond_the_data_is_empty() {
        let store = InMemoryRecordStore::new();
        store.create(draft("Samsung", 10000.0, 50)).await.unwrap();

        let page = store
            .find_page(Pagination {
                limit: 10,
                offset: 10,
            })
            .await
            .unwrap();

        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_record_is_not_found() {
        let store = InMemoryRecordStore::new();

        let ghost = Product {
            id: ProductId::new(999),
            name: "ghost".to_string(),
            price: 1.0,
            quantity: 1,
        };

        assert_eq!(store.update(&ghost).await, Err(StoreError::NotFound));
    }

    #[tokio::test]
    async fn patch_all_touches_every_record() {
        let store = InMemoryRecordStore::new();
        store.create(draft("Samsung", 10000.0, 50)).await.unwrap();
        store.create(draft("Nokia", 70000.0, 75)).await.unwrap();

        let patch = ProductPatch {
            price: Some(5.0),
            ..ProductPatch::default()
        };
        let touched = store.patch_all(&patch).await.unwrap();
        assert_eq!(touched, 2);

        for product in store.find_all().await.unwrap() {
            assert_eq!(product.price, 5.0);
        }
    }

    #[tokio::test]
    async fn delete_removes_the_record() {
        let store = InMemoryRecordStore::new();
        let product = store.create(draft("Samsung", 10000.0, 50)).await.unwrap();

        store.delete(product.id).await.unwrap();

        assert_eq!(store.find_by_id(product.id).await.unwrap(), None);
        assert_eq!(store.delete(product.id).await, Err(StoreError::NotFound));
    }
}
