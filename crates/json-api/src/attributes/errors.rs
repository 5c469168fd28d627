//! Attribute Errors

use salvo::http::StatusError;

use dairycart_app::domain::attributes::AttributesServiceError;

use crate::errors::{internal, invalid_input, not_found};

/// `id` is whichever identifier the request addressed.
pub(crate) fn into_status_error(error: AttributesServiceError, id: i64) -> StatusError {
    match error {
        AttributesServiceError::AttributeNotFound => not_found("product attribute", id),
        AttributesServiceError::ValueNotFound => not_found("product attribute value", id),
        AttributesServiceError::AlreadyExists => {
            invalid_input("product attribute value already exists for this attribute")
        }
        AttributesServiceError::EmptyUpdate => invalid_input("update contains no changes"),
        AttributesServiceError::InvalidData => invalid_input("invalid product attribute value"),
        error @ (AttributesServiceError::Mapping(_) | AttributesServiceError::Sql(_)) => {
            internal("attribute request failed", &error)
        }
    }
}
