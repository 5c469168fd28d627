//! Progenitors Data

use crate::{domain::progenitors::records::Dimensions, rounding::round_stored};

/// New Progenitor Data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewProgenitor {
    pub name: String,
    pub description: String,
    pub taxable: bool,
    pub price: f64,
    pub product_dimensions: Dimensions,
    pub package_dimensions: Dimensions,
}

impl NewProgenitor {
    /// Price and dimensions at stored precision.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            price: round_stored(self.price),
            product_dimensions: self.product_dimensions.rounded(),
            package_dimensions: self.package_dimensions.rounded(),
            ..self
        }
    }
}
