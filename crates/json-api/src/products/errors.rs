//! Product Errors

use salvo::http::StatusError;

use dairycart_app::domain::products::{ProductsServiceError, errors::CreationStep};

use crate::errors::{internal, invalid_input, not_found};

/// `sku` is the SKU the request addressed, or the one it tried to create.
pub(crate) fn into_status_error(error: ProductsServiceError, sku: &str) -> StatusError {
    match error {
        ProductsServiceError::NotFound => not_found("product", sku),
        ProductsServiceError::AlreadyExists => {
            invalid_input(format!("product with sku `{sku}` already exists"))
        }
        ProductsServiceError::InvalidSku(invalid) => invalid_input(format!(
            "invalid sku `{invalid}`: only letters, hyphens and underscores are allowed"
        )),
        ProductsServiceError::EmptyUpdate => invalid_input("update contains no changes"),
        ProductsServiceError::InvalidReference
        | ProductsServiceError::MissingRequiredData
        | ProductsServiceError::InvalidData => invalid_input("invalid product payload"),
        ProductsServiceError::Creation { step, source } => {
            // Constraint violations classify like any other write, except that
            // only the product insert can collide on the SKU.
            match (step, ProductsServiceError::from(source)) {
                (_, ProductsServiceError::Sql(source)) => internal(
                    &format!("product creation failed at the {step} step"),
                    &source,
                ),
                (
                    CreationStep::Attribute | CreationStep::AttributeValue,
                    ProductsServiceError::AlreadyExists,
                ) => invalid_input(format!("duplicate {step} in product `{sku}`")),
                (_, classified) => into_status_error(classified, sku),
            }
        }
        error @ (ProductsServiceError::Mapping(_) | ProductsServiceError::Sql(_)) => {
            internal("product request failed", &error)
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use dairycart_app::mapping::MappingError;

    use crate::test_helpers::unique_violation;

    use super::*;

    #[test]
    fn duplicate_sku_is_invalid_input() {
        let error = into_status_error(ProductsServiceError::AlreadyExists, "skateboard");

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "product with sku `skateboard` already exists");
    }

    #[test]
    fn missing_product_is_not_found() {
        let error = into_status_error(ProductsServiceError::NotFound, "scooter");

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert!(error.brief.contains("(identified by `scooter`)"));
    }

    #[test]
    fn mapping_failures_are_internal() {
        let error = into_status_error(
            ProductsServiceError::Mapping(MappingError::MissingSection("products")),
            "skateboard",
        );

        assert_eq!(error.code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.brief, "Unexpected internal error");
    }

    #[test]
    fn duplicate_attribute_value_is_not_reported_as_duplicate_sku() {
        let error = into_status_error(
            ProductsServiceError::Creation {
                step: CreationStep::AttributeValue,
                source: unique_violation(),
            },
            "skateboard",
        );

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "duplicate attribute value in product `skateboard`");
    }

    #[test]
    fn duplicate_sku_at_product_insert_is_already_exists() {
        let error = into_status_error(
            ProductsServiceError::Creation {
                step: CreationStep::Product,
                source: unique_violation(),
            },
            "skateboard",
        );

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.brief, "product with sku `skateboard` already exists");
    }
}
