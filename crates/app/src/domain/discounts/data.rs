//! Discounts Data

use jiff::Timestamp;

use crate::{
    domain::{
        discounts::records::{DiscountRecord, DiscountType},
        products::records::ProductId,
    },
    merge::{ZeroValue, overlay},
    rounding::round_stored,
};

/// New Discount Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDiscount {
    pub name: String,
    pub discount_type: DiscountType,
    pub amount: f64,
    pub product_id: Option<ProductId>,
    pub starts_on: Timestamp,
    pub expires_on: Option<Timestamp>,
    pub redemption_code: Option<String>,
    pub max_uses: Option<i32>,
    pub login_required: bool,
}

/// Discount Update Data
///
/// Zero values and `None` keep the current value, so nullable columns cannot
/// be cleared through an update.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiscountUpdate {
    pub name: String,
    pub discount_type: Option<DiscountType>,
    pub amount: f64,
    pub product_id: Option<ProductId>,
    pub starts_on: Option<Timestamp>,
    pub expires_on: Option<Timestamp>,
    pub redemption_code: Option<String>,
    pub max_uses: Option<i32>,
    pub login_required: bool,
}

impl DiscountUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_zero()
            && self.discount_type.is_zero()
            && self.amount.is_zero()
            && self.product_id.is_zero()
            && self.starts_on.is_zero()
            && self.expires_on.is_zero()
            && self.redemption_code.is_zero()
            && self.max_uses.is_zero()
            && self.login_required.is_zero()
    }

    #[must_use]
    pub fn merge(&self, existing: &DiscountRecord) -> DiscountRecord {
        DiscountRecord {
            name: overlay(self.name.clone(), existing.name.clone()),
            discount_type: self.discount_type.unwrap_or(existing.discount_type),
            amount: round_stored(overlay(self.amount, existing.amount)),
            product_id: overlay(self.product_id, existing.product_id),
            starts_on: self.starts_on.unwrap_or(existing.starts_on),
            expires_on: overlay(self.expires_on, existing.expires_on),
            redemption_code: overlay(self.redemption_code.clone(), existing.redemption_code.clone()),
            max_uses: overlay(self.max_uses, existing.max_uses),
            login_required: overlay(self.login_required, existing.login_required),
            ..existing.clone()
        }
    }
}
