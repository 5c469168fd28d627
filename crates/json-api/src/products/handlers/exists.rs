//! Product Existence Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, products::errors::into_status_error};

/// Product Existence Handler
///
/// 200 when an unarchived product has the SKU, 404 otherwise. No body.
#[endpoint(
    tags("products"),
    summary = "Check Product Exists",
    responses(
        (status_code = StatusCode::OK, description = "Product exists"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    sku: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let app = depot.app_or_500()?;
    let sku = sku.into_inner();

    let exists = app
        .products
        .product_exists(sku.clone())
        .await
        .map_err(|error| into_status_error(error, &sku))?;

    Ok(if exists {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    })
}
