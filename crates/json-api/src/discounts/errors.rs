//! Discount Errors

use salvo::http::StatusError;

use dairycart_app::domain::discounts::{DiscountsServiceError, records::DiscountId};

use crate::errors::{internal, invalid_input, not_found};

/// `discount` is the addressed discount, `None` when creating one.
pub(crate) fn into_status_error(
    error: DiscountsServiceError,
    discount: Option<DiscountId>,
) -> StatusError {
    match (error, discount) {
        (DiscountsServiceError::NotFound, Some(discount)) => not_found("discount", discount),
        (DiscountsServiceError::AlreadyExists, _) => invalid_input("discount already exists"),
        (DiscountsServiceError::EmptyUpdate, _) => invalid_input("update contains no changes"),
        (DiscountsServiceError::InvalidReference, _) => {
            invalid_input("discount refers to a product that does not exist")
        }
        (DiscountsServiceError::MissingRequiredData | DiscountsServiceError::InvalidData, _) => {
            invalid_input("invalid discount payload")
        }
        (
            error @ (DiscountsServiceError::NotFound
            | DiscountsServiceError::Mapping(_)
            | DiscountsServiceError::Sql(_)),
            _,
        ) => internal("discount request failed", &error),
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use super::*;

    #[test]
    fn missing_discount_names_its_id() {
        let error = into_status_error(
            DiscountsServiceError::NotFound,
            Some(DiscountId::from_i64(7)),
        );

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(
            error.brief,
            "The discount you were looking for (identified by `7`) does not exist"
        );
    }

    #[test]
    fn not_found_while_creating_is_internal() {
        let error = into_status_error(DiscountsServiceError::NotFound, None);

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn unknown_product_reference_is_invalid_input() {
        let error = into_status_error(DiscountsServiceError::InvalidReference, None);

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
    }
}
