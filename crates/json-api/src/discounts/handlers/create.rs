//! Create Discount Handler

use jiff::Timestamp;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::{discounts::data::NewDiscount, products::records::ProductId};

use crate::{
    discounts::{
        errors::into_status_error,
        get::DiscountResponse,
        timestamps::{parse_discount_type, parse_timestamp},
    },
    extensions::*,
};

/// Create Discount Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateDiscountRequest {
    pub name: String,

    /// `percentage` or `flat_amount`
    #[serde(rename = "type")]
    pub discount_type: String,

    pub amount: f64,

    #[serde(default)]
    pub product_id: Option<i64>,

    /// RFC 3339; defaults to now
    #[serde(default)]
    pub starts_on: Option<String>,

    /// RFC 3339
    #[serde(default)]
    pub expires_on: Option<String>,

    #[serde(default)]
    pub redemption_code: Option<String>,

    #[serde(default)]
    pub max_uses: Option<i32>,

    #[serde(default)]
    pub login_required: bool,
}

impl CreateDiscountRequest {
    fn into_new_discount(self) -> Result<NewDiscount, StatusError> {
        Ok(NewDiscount {
            discount_type: parse_discount_type(&self.discount_type)?,
            starts_on: parse_timestamp("starts_on", self.starts_on.as_deref())?
                .unwrap_or_else(Timestamp::now),
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

/// Create Discount Handler
#[endpoint(
    tags("discounts"),
    summary = "Create Discount",
    responses(
        (status_code = StatusCode::CREATED, description = "Discount created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDiscountRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<DiscountResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let discount = json.into_inner().into_new_discount()?;

    let created = app
        .discounts
        .create_discount(discount)
        .await
        .map_err(|error| into_status_error(error, None))?;

    res.add_header(LOCATION, format!("/discount/{}", created.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}
