//! Postgres-backed record store.
//!
//! One `products` table, bootstrapped on connect (this service carries no
//! migration machinery). All row mapping is explicit; the catalog crate
//! stays free of sqlx.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use stockroom_catalog::{Product, ProductDraft, ProductId, ProductPatch};
use stockroom_core::{Pagination, StoreError};

use super::r#trait::RecordStore;

const SELECT_FIELDS: &str = "id, name, price, quantity";

/// Record store over a sqlx connection pool.
pub struct PostgresRecordStore {
    pool: PgPool,
}

impl PostgresRecordStore {
    /// Connect and ensure the `products` table exists.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(url)
            .await
            .map_err(to_store_err)?;

        let store = Self::with_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Wrap an existing pool (tests, shared pools).
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                price DOUBLE PRECISION NOT NULL,
                quantity BIGINT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(to_store_err)?;

        Ok(())
    }
}

fn to_store_err(err: sqlx::Error) -> StoreError {
    StoreError::unavailable(err.to_string())
}

fn row_to_product(row: &PgRow) -> Result<Product, StoreError> {
    Ok(Product {
        id: ProductId::new(row.try_get::<i64, _>("id").map_err(to_store_err)?),
        name: row.try_get::<String, _>("name").map_err(to_store_err)?,
        price: row.try_get::<f64, _>("price").map_err(to_store_err)?,
        quantity: row.try_get::<i64, _>("quantity").map_err(to_store_err)?,
    })
}

#[async_trait]
impl RecordStore for PostgresRecordStore {
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let row = sqlx::query(&format!(
            "INSERT INTO products (name, price, quantity) VALUES ($1, $2, $3) RETURNING {SELECT_FIELDS}"
        ))
        .bind(&draft.name)
        .bind(draft.price)
        .bind(draft.quantity)
        .fetch_one(&self.pool)
        .await
        .map_err(to_store_err)?;

        row_to_product(&row)
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(to_store_err)?;

        let total = row.try_get::<i64, _>("total").map_err(to_store_err)?;
        Ok(total as u64)
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_FIELDS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(to_store_err)?;

        rows.iter().map(row_to_product).collect()
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(&format!(
            "SELECT {SELECT_FIELDS} FROM products WHERE id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(to_store_err)?;

        row.as_ref().map(row_to_product).transpose()
    }

    async fn find_page(&self, page: Pagination) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {SELECT_FIELDS} FROM products ORDER BY id LIMIT $1 OFFSET $2"
        ))
        .bind(i64::from(page.limit))
        .bind(i64::from(page.offset))
        .fetch_all(&self.pool)
        .await
        .map_err(to_store_err)?;

        rows.iter().map(row_to_product).collect()
    }

    async fn update(&self, product: &Product) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE products SET name = $2, price = $3, quantity = $4 WHERE id = $1",
        )
        .bind(product.id.as_i64())
        .bind(&product.name)
        .bind(product.price)
        .bind(product.quantity)
        .execute(&self.pool)
        .await
        .map_err(to_store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn patch(&self, id: ProductId, patch: ProductPatch) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = COALESCE($2, name),
                price = COALESCE($3, price),
                quantity = COALESCE($4, quantity)
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .bind(&patch.name)
        .bind(patch.price)
        .bind(patch.quantity)
        .execute(&self.pool)
        .await
        .map_err(to_store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn patch_all(&self, patch: &ProductPatch) -> Result<u64, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET name = COALESCE($1, name),
                price = COALESCE($2, price),
                quantity = COALESCE($3, quantity)
            "#,
        )
        .bind(&patch.name)
        .bind(patch.price)
        .bind(patch.quantity)
        .execute(&self.pool)
        .await
        .map_err(to_store_err)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(to_store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
