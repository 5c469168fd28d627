//! Update Discount Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::{
    discounts::{data::DiscountUpdate, records::DiscountId},
    products::records::ProductId,
};

use crate::{
    discounts::{
        errors::into_status_error,
        get::DiscountResponse,
        timestamps::{parse_discount_type, parse_timestamp},
    },
    extensions::*,
};

/// Update Discount Request
///
/// Omitted fields, and fields set to their zero value, keep the stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateDiscountRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub discount_type: Option<String>,
    pub amount: f64,
    pub product_id: Option<i64>,
    pub starts_on: Option<String>,
    pub expires_on: Option<String>,
    pub redemption_code: Option<String>,
    pub max_uses: Option<i32>,
    pub login_required: bool,
}

impl UpdateDiscountRequest {
    fn into_update(self) -> Result<DiscountUpdate, StatusError> {
        let discount_type = match self.discount_type.as_deref() {
            None | Some("") => None,
            Some(value) => Some(parse_discount_type(value)?),
        };

        Ok(DiscountUpdate {
            discount_type,
            starts_on: parse_timestamp("starts_on", self.starts_on.as_deref())?,
            expires_on: parse_timestamp("expires_on", self.expires_on.as_deref())?,
            name: self.name,
            amount: self.amount,
            product_id: self.product_id.map(ProductId::from_i64),
            redemption_code: self.redemption_code.filter(|code| !code.is_empty()),
            max_uses: self.max_uses,
            login_required: self.login_required,
        })
    }
}

/// Update Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Update Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "discounts.update",
    skip(discount, json, depot),
    fields(discount = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    discount: PathParam<i64>,
    json: JsonBody<UpdateDiscountRequest>,
    depot: &mut Depot,
) -> Result<Json<DiscountResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let discount = DiscountId::from_i64(discount.into_inner());

    tracing::Span::current().record("discount", discount.into_i64());

    let update = json.into_inner().into_update()?;

    let updated = app
        .discounts
        .update_discount(discount, update)
        .await
        .map_err(|error| into_status_error(error, Some(discount)))?;

    Ok(Json(updated.into()))
}
