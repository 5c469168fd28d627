//! Get Discount Handler

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::discounts::records::{DiscountId, DiscountRecord};

use crate::{discounts::errors::into_status_error, extensions::*};

/// Discount Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct DiscountResponse {
    pub id: i64,
    pub name: String,

    /// `percentage` or `flat_amount`
    #[serde(rename = "type")]
    pub discount_type: String,

    pub amount: f64,
    pub product_id: Option<i64>,
    pub starts_on: String,
    pub expires_on: Option<String>,
    pub redemption_code: Option<String>,
    pub max_uses: Option<i32>,
    pub login_required: bool,
    pub created_on: String,
    pub updated_on: Option<String>,
}

impl From<DiscountRecord> for DiscountResponse {
    fn from(discount: DiscountRecord) -> Self {
        Self {
            id: discount.id.into_i64(),
            name: discount.name,
            discount_type: discount.discount_type.to_string(),
            amount: discount.amount,
            product_id: discount.product_id.map(|product| product.into_i64()),
            starts_on: discount.starts_on.to_string(),
            expires_on: discount.expires_on.as_ref().map(ToString::to_string),
            redemption_code: discount.redemption_code,
            max_uses: discount.max_uses,
            login_required: discount.login_required,
            created_on: discount.created_on.to_string(),
            updated_on: discount.updated_on.as_ref().map(ToString::to_string),
        }
    }
}

/// Get Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Get Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    discount: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<DiscountResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let discount = DiscountId::from_i64(discount.into_inner());

    let record = app
        .discounts
        .get_discount(discount)
        .await
        .map_err(|error| into_status_error(error, Some(discount)))?;

    Ok(Json(record.into()))
}
