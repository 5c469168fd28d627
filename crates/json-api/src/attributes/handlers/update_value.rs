//! Update Attribute Value Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::attributes::{
    data::AttributeValueUpdate, records::AttributeValueId,
};

use crate::{
    attributes::{errors::into_status_error, values::AttributeValueResponse},
    extensions::*,
};

/// Update Attribute Value Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateAttributeValueRequest {
    /// Replacement value; empty keeps the current one
    #[serde(default)]
    pub value: String,
}

impl From<UpdateAttributeValueRequest> for AttributeValueUpdate {
    fn from(request: UpdateAttributeValueRequest) -> Self {
        Self {
            value: request.value,
        }
    }
}

/// Update Attribute Value Handler
#[endpoint(
    tags("attributes"),
    summary = "Update Attribute Value",
    responses(
        (status_code = StatusCode::OK, description = "Attribute value updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Attribute value not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "attributes.update_value",
    skip(value, json, depot),
    fields(value_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    value: PathParam<i64>,
    json: JsonBody<UpdateAttributeValueRequest>,
    depot: &mut Depot,
) -> Result<Json<AttributeValueResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let value = value.into_inner();

    tracing::Span::current().record("value_id", value);

    let updated = app
        .attributes
        .update_value(AttributeValueId::from_i64(value), json.into_inner().into())
        .await
        .map_err(|error| into_status_error(error, value))?;

    Ok(Json(updated.into()))
}
