use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product identifier.
///
/// Assigned by the record store on insert (monotonically increasing from 1)
/// and stable for the lifetime of the record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ProductId> for i64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// A stored product record.
///
/// `price` and `quantity` are expected non-negative but not enforced here;
/// the service stores what the caller sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// What a create inserts; the record store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductDraft {
    /// Materialize the draft into a record under the id the store assigned.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            quantity: self.quantity,
        }
    }
}

/// Partial update: only the set fields are written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }

    /// Overwrite the set fields on `product`. The id is never touched.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
    }
}

/// One entry of a price-update batch.
///
/// Ephemeral: lives only for the duration of a single bulk-update call and
/// is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub id: ProductId,
    pub new_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_parses_and_displays() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id, ProductId::new(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn product_id_rejects_garbage() {
        assert!("not-a-number".parse::<ProductId>().is_err());
    }

    #[test]
    fn wire_shape_is_exactly_four_fields() {
        let product = Product {
            id: ProductId::new(7),
            name: "Nokia".to_string(),
            price: 70000.0,
            quantity: 75,
        };

        let value = serde_json::to_value(&product).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["id"], 7);
        assert_eq!(object["name"], "Nokia");
        assert_eq!(object["price"], 70000.0);
        assert_eq!(object["quantity"], 75);
    }

    #[test]
    fn patch_overwrites_only_set_fields() {
        let mut product = Product {
            id: ProductId::new(1),
            name: "Samsung".to_string(),
            price: 10000.0,
            quantity: 50,
        };

        let patch = ProductPatch {
            name: None,
            price: Some(9500.0),
            quantity: None,
        };
        patch.apply_to(&mut product);

        assert_eq!(product.name, "Samsung");
        assert_eq!(product.price, 9500.0);
        assert_eq!(product.quantity, 50);
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let patch = ProductPatch::default();
        assert!(patch.is_empty());

        let mut product = Product {
            id: ProductId::new(1),
            name: "poco".to_string(),
            price: 120000.0,
            quantity: 40,
        };
        let before = product.clone();
        patch.apply_to(&mut product);
        assert_eq!(product, before);
    }

    #[test]
    fn draft_materializes_under_assigned_id() {
        let draft = ProductDraft {
            name: "realme".to_string(),
            price: 900000.0,
            quantity: 60,
        };

        let product = draft.into_product(ProductId::new(5));
        assert_eq!(product.id, ProductId::new(5));
        assert_eq!(product.name, "realme");
    }
}
