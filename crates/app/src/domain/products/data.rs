//! Products Data

use crate::{
    domain::{
        attributes::data::{Attribute, NewAttribute},
        products::records::ProductRecord,
        progenitors::{data::NewProgenitor, records::ProgenitorRecord},
    },
    merge::{ZeroValue, overlay},
    rounding::round_stored,
};

/// A product as read: its own row, the progenitor it belongs to and, for
/// single reads, the progenitor's attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub record: ProductRecord,
    pub progenitor: ProgenitorRecord,
    pub attributes: Vec<Attribute>,
}

/// New Product Data
///
/// Creates the progenitor, its attributes and their values along with the
/// product itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub upc: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub cost: f64,
    pub progenitor: NewProgenitor,
    pub attributes: Vec<NewAttribute>,
}

impl NewProduct {
    /// Money and dimension values at stored precision.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            price: round_stored(self.price),
            cost: round_stored(self.cost),
            progenitor: self.progenitor.rounded(),
            ..self
        }
    }
}

/// Product Update Data
///
/// Zero values mean "keep the current value".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductUpdate {
    pub sku: String,
    pub name: String,
    pub upc: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub cost: f64,
}

impl ProductUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sku.is_zero()
            && self.name.is_zero()
            && self.upc.is_zero()
            && self.quantity.is_zero()
            && self.price.is_zero()
            && self.cost.is_zero()
    }

    #[must_use]
    pub fn merge(&self, existing: &ProductRecord) -> ProductRecord {
        ProductRecord {
            sku: overlay(self.sku.clone(), existing.sku.clone()),
            name: overlay(self.name.clone(), existing.name.clone()),
            upc: overlay(self.upc.clone(), existing.upc.clone()),
            quantity: overlay(self.quantity, existing.quantity),
            price: round_stored(overlay(self.price, existing.price)),
            cost: round_stored(overlay(self.cost, existing.cost)),
            ..existing.clone()
        }
    }
}
