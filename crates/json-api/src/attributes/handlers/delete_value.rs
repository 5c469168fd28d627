//! Delete Attribute Value Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use dairycart_app::domain::attributes::records::AttributeValueId;

use crate::{attributes::errors::into_status_error, extensions::*};

/// Delete Attribute Value Handler
///
/// Archives the value; it stays stored but disappears from reads.
#[endpoint(
    tags("attributes"),
    summary = "Delete Attribute Value",
    responses(
        (status_code = StatusCode::OK, description = "Attribute value deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Attribute value not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    value: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let value = value.into_inner();

    app.attributes
        .archive_value(AttributeValueId::from_i64(value))
        .await
        .map_err(|error| into_status_error(error, value))?;

    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use dairycart_app::domain::attributes::{AttributesServiceError, MockAttributesService};

    use crate::test_helpers::attributes_service;

    use super::*;

    fn make_service(attributes: MockAttributesService) -> Service {
        attributes_service(
            attributes,
            Router::with_path("product_attribute_values/{value}").delete(handler),
        )
    }

    #[tokio::test]
    async fn test_delete_value_success() -> TestResult {
        let mut attributes = MockAttributesService::new();

        attributes
            .expect_archive_value()
            .once()
            .withf(|value| *value == AttributeValueId::from_i64(4))
            .return_once(|_| Ok(()));

        let res = TestClient::delete("http://example.com/product_attribute_values/4")
            .send(&make_service(attributes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_value_missing_returns_404() -> TestResult {
        let mut attributes = MockAttributesService::new();

        attributes
            .expect_archive_value()
            .once()
            .return_once(|_| Err(AttributesServiceError::ValueNotFound));

        let res = TestClient::delete("http://example.com/product_attribute_values/4")
            .send(&make_service(attributes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
