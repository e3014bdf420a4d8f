//! Catalog Item Model

use crate::money::{round_money, to_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Item entity as served by the catalog endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique within one catalog, stable across loads
    pub id: u64,
    pub name: String,
    /// Unit price in pounds
    pub price: f64,
    /// Image stem, resolved under `/images/`
    pub image_name: String,
}

impl Item {
    pub fn new(id: u64, name: impl Into<String>, price: f64, image_name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            image_name: image_name.into(),
        }
    }

    /// Price as a `Decimal`, rounded to pence
    pub fn price_decimal(&self) -> Decimal {
        round_money(to_decimal(self.price))
    }

    /// Public path of the item's image
    pub fn image_path(&self) -> String {
        format!("/images/{}.svg", self.image_name)
    }
}
