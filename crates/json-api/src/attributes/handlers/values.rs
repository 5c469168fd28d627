//! List Attribute Values Handler

use std::string::ToString;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::attributes::records::{AttributeId, AttributeValueRecord};

use crate::{attributes::errors::into_status_error, extensions::*};

/// Attribute Value Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AttributeValueResponse {
    /// The identifier of the value
    pub id: i64,

    /// The attribute this value belongs to
    pub product_attribute_id: i64,

    /// The value itself, e.g. "red"
    pub value: String,

    /// The date and time the value was created
    pub created_on: String,

    /// The date and time the value was last updated
    pub updated_on: Option<String>,
}

impl From<AttributeValueRecord> for AttributeValueResponse {
    fn from(value: AttributeValueRecord) -> Self {
        Self {
            id: value.id.into_i64(),
            product_attribute_id: value.attribute_id.into_i64(),
            value: value.value,
            created_on: value.created_on.to_string(),
            updated_on: value.updated_on.as_ref().map(ToString::to_string),
        }
    }
}

/// List Attribute Values Handler
///
/// Returns the active values of an attribute.
#[endpoint(
    tags("attributes"),
    summary = "List Attribute Values",
    responses(
        (status_code = StatusCode::OK, description = "Attribute values"),
        (status_code = StatusCode::NOT_FOUND, description = "Attribute not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    attribute: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<Vec<AttributeValueResponse>>, StatusError> {
    let app = depot.app_or_500()?;
    let attribute = attribute.into_inner();

    let values = app
        .attributes
        .list_values(AttributeId::from_i64(attribute))
        .await
        .map_err(|error| into_status_error(error, attribute))?;

    Ok(Json(values.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use dairycart_app::domain::attributes::{AttributesServiceError, MockAttributesService};

    use crate::test_helpers::{attributes_service, make_value};

    use super::*;

    fn make_service(attributes: MockAttributesService) -> Service {
        attributes_service(
            attributes,
            Router::with_path("product_attributes/{attribute}/values").get(handler),
        )
    }

    #[tokio::test]
    async fn test_values_returns_200() -> TestResult {
        let mut attributes = MockAttributesService::new();

        attributes
            .expect_list_values()
            .once()
            .withf(|attribute| *attribute == AttributeId::from_i64(3))
            .return_once(|_| Ok(vec![make_value(4, 3, "red"), make_value(5, 3, "blue")]));

        let mut res = TestClient::get("http://example.com/product_attributes/3/values")
            .send(&make_service(attributes))
            .await;

        let body: Vec<AttributeValueResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(
            body.iter().map(|value| value.value.as_str()).collect::<Vec<_>>(),
            ["red", "blue"]
        );
        assert!(body.iter().all(|value| value.product_attribute_id == 3));

        Ok(())
    }

    #[tokio::test]
    async fn test_values_missing_attribute_returns_404() -> TestResult {
        let mut attributes = MockAttributesService::new();

        attributes
            .expect_list_values()
            .once()
            .return_once(|_| Err(AttributesServiceError::AttributeNotFound));

        let mut res = TestClient::get("http://example.com/product_attributes/9/values")
            .send(&make_service(attributes))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert!(
            res.take_string()
                .await?
                .contains("The product attribute you were looking for (identified by `9`) does not exist")
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_values_non_numeric_id_returns_400() -> TestResult {
        let res = TestClient::get("http://example.com/product_attributes/color/values")
            .send(&make_service(MockAttributesService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
