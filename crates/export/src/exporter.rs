use thiserror::Error;

use stockroom_catalog::Product;
use stockroom_core::{Pagination, StoreError};
use stockroom_infra::RecordStore;

use crate::csv::Column;

/// Records per export page. A design constant, not caller-configurable.
pub const PAGE_SIZE: u32 = 10;

/// Target rendering for an export page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

/// A rendered export page plus the content type it should be served with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub content_type: &'static str,
    pub body: String,
}

/// Export pipeline failure.
///
/// Store failures keep their meaning for the caller (the page could not be
/// fetched); the remaining variants are encoder-level and indicate a bug
/// rather than an operational condition.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv buffer error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv produced invalid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fetches one bounded page of records and renders it.
///
/// The page fetch is always `(limit = PAGE_SIZE, offset)` against the
/// store; the full table is never materialized here.
#[derive(Debug, Clone)]
pub struct Exporter<S> {
    store: S,
}

impl<S: RecordStore> Exporter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Render `page` (1-based) in `format`.
    ///
    /// A page of 0 is clamped to the first page. A page beyond the data is
    /// not an error: JSON renders `[]`, CSV renders a header-only document.
    pub async fn export(
        &self,
        page: u32,
        format: ExportFormat,
    ) -> Result<ExportDocument, ExportError> {
        let offset = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
        let products = self
            .store
            .find_page(Pagination {
                limit: PAGE_SIZE,
                offset,
            })
            .await?;

        match format {
            ExportFormat::Json => Ok(ExportDocument {
                content_type: "application/json",
                body: serde_json::to_string(&products)?,
            }),
            ExportFormat::Csv => Ok(ExportDocument {
                content_type: "text/csv",
                body: crate::csv::encode(&product_columns(), &products)?,
            }),
        }
    }
}

/// Column layout for product exports. Header order is part of the contract.
pub(crate) fn product_columns() -> [Column<Product>; 4] {
    [
        Column {
            title: "ID",
            value: |p| p.id.to_string(),
        },
        Column {
            title: "Name",
            value: |p| p.name.clone(),
        },
        Column {
            title: "Price",
            value: |p| p.price.to_string(),
        },
        Column {
            title: "Quantity",
            value: |p| p.quantity.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use stockroom_catalog::ProductDraft;
    use stockroom_infra::InMemoryRecordStore;

    async fn store_with_n_products(n: usize) -> Arc<InMemoryRecordStore> {
        let store = Arc::new(InMemoryRecordStore::new());
        for i in 1..=n {
            store
                .create(ProductDraft {
                    name: format!("product-{i}"),
                    price: i as f64,
                    quantity: i as i64,
                })
                .await
                .unwrap();
        }
        store
    }

    fn json_ids(doc: &ExportDocument) -> Vec<i64> {
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&doc.body).unwrap();
        parsed
            .iter()
            .map(|p| p["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn json_pages_are_bounded_at_ten() {
        let exporter = Exporter::new(store_with_n_products(25).await);

        let page1 = exporter.export(1, ExportFormat::Json).await.unwrap();
        let page3 = exporter.export(3, ExportFormat::Json).await.unwrap();

        assert_eq!(page1.content_type, "application/json");
        assert_eq!(json_ids(&page1), (1..=10).collect::<Vec<_>>());
        assert_eq!(json_ids(&page3), (21..=25).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn second_page_starts_at_offset_ten() {
        let exporter = Exporter::new(store_with_n_products(25).await);

        let page2 = exporter.export(2, ExportFormat::Json).await.unwrap();
        assert_eq!(json_ids(&page2), (11..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn page_beyond_the_data_is_empty_not_an_error() {
        let exporter = Exporter::new(store_with_n_products(3).await);

        let json = exporter.export(5, ExportFormat::Json).await.unwrap();
        assert_eq!(json.body, "[]");

        let csv = exporter.export(5, ExportFormat::Csv).await.unwrap();
        assert_eq!(csv.body, "ID,Name,Price,Quantity\n");
    }

    #[tokio::test]
    async fn page_zero_is_clamped_to_the_first_page() {
        let exporter = Exporter::new(store_with_n_products(12).await);

        let page0 = exporter.export(0, ExportFormat::Json).await.unwrap();
        let page1 = exporter.export(1, ExportFormat::Json).await.unwrap();
        assert_eq!(page0.body, page1.body);
    }

    #[tokio::test]
    async fn csv_header_line_is_exact() {
        let exporter = Exporter::new(store_with_n_products(2).await);

        let doc = exporter.export(1, ExportFormat::Csv).await.unwrap();
        assert_eq!(doc.content_type, "text/csv");
        assert_eq!(doc.body.lines().next().unwrap(), "ID,Name,Price,Quantity");
        assert_eq!(doc.body.lines().count(), 3);
    }

    #[tokio::test]
    async fn csv_quotes_names_containing_commas() {
        let store = Arc::new(InMemoryRecordStore::new());
        store
            .create(ProductDraft {
                name: "Acme, Inc.".to_string(),
                price: 500.0,
                quantity: 3,
            })
            .await
            .unwrap();

        let exporter = Exporter::new(store);
        let doc = exporter.export(1, ExportFormat::Csv).await.unwrap();

        assert_eq!(doc.body, "ID,Name,Price,Quantity\n1,\"Acme, Inc.\",500,3\n");
    }

    #[tokio::test]
    async fn json_preserves_store_order_and_field_names() {
        let exporter = Exporter::new(store_with_n_products(2).await);

        let doc = exporter.export(1, ExportFormat::Json).await.unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&doc.body).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0]["name"], "product-1");
        assert_eq!(parsed[1]["quantity"], 2);
    }
}
