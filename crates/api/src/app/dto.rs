//! Request DTOs and mapping to domain types.

use serde::Deserialize;

use stockroom_catalog::{PriceUpdate, ProductDraft, ProductId, ProductPatch};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl CreateProductRequest {
    pub fn into_draft(self) -> ProductDraft {
        ProductDraft {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// PUT body: the full record; the id comes from the path.
#[derive(Debug, Deserialize)]
pub struct ReplaceProductRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Default, Deserialize)]
pub struct PatchProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl PatchProductRequest {
    pub fn into_patch(self) -> ProductPatch {
        ProductPatch {
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// One entry of the `POST /updatePrices` batch. The wire field name
/// `newPrice` is part of the public contract.
#[derive(Debug, Deserialize)]
pub struct PriceUpdateRequest {
    pub id: i64,
    #[serde(rename = "newPrice")]
    pub new_price: f64,
}

impl PriceUpdateRequest {
    pub fn into_update(self) -> PriceUpdate {
        PriceUpdate {
            id: ProductId::new(self.id),
            new_price: self.new_price,
        }
    }
}

/// Query string for the export endpoints; a missing page means page 1.
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    pub page: Option<u32>,
}

/// Query string for the list endpoint. Leaving both fields off returns the
/// whole catalog; setting either turns the list into a bounded slice.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}
