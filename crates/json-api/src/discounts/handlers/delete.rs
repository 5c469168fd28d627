//! Delete Discount Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use dairycart_app::domain::discounts::records::DiscountId;

use crate::{discounts::errors::into_status_error, extensions::*};

/// Delete Discount Handler
///
/// Archives the discount.
#[endpoint(
    tags("discounts"),
    summary = "Delete Discount",
    responses(
        (status_code = StatusCode::OK, description = "Discount deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Discount not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    discount: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let discount = DiscountId::from_i64(discount.into_inner());

    app.discounts
        .archive_discount(discount)
        .await
        .map_err(|error| into_status_error(error, Some(discount)))?;

    Ok(StatusCode::OK)
}
