//! Timestamp and discount type fields of discount requests.

use jiff::Timestamp;
use salvo::prelude::StatusError;

use dairycart_app::domain::discounts::records::DiscountType;

use crate::extensions::*;

/// Parse an optional RFC 3339 timestamp field.
pub(super) fn parse_timestamp(
    field: &str,
    value: Option<&str>,
) -> Result<Option<Timestamp>, StatusError> {
    value
        .filter(|value| !value.is_empty())
        .map(str::parse::<Timestamp>)
        .transpose()
        .or_400(&format!("could not parse `{field}`"))
}

/// Discount types form a closed set; anything else is rejected.
pub(super) fn parse_discount_type(value: &str) -> Result<DiscountType, StatusError> {
    value.parse::<DiscountType>().or_400("invalid discount type")
}
