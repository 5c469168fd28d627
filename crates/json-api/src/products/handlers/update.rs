//! Update Product Handler

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::products::data::ProductUpdate;

use crate::{extensions::*, products::errors::into_status_error, products::get::ProductResponse};

/// Update Product Request
///
/// Omitted fields, and fields set to their zero value, keep the stored value.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub(crate) struct UpdateProductRequest {
    pub sku: String,
    pub name: String,
    pub upc: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub cost: f64,
}

impl From<UpdateProductRequest> for ProductUpdate {
    fn from(request: UpdateProductRequest) -> Self {
        ProductUpdate {
            sku: request.sku,
            name: request.name,
            upc: request.upc.filter(|upc| !upc.is_empty()),
            quantity: request.quantity,
            price: request.price,
            cost: request.cost,
        }
    }
}

/// Product Update Handler
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(sku, json, depot),
    fields(sku = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    sku: PathParam<String>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let sku = sku.into_inner();

    tracing::Span::current().record("sku", tracing::field::display(&sku));

    let product = app
        .products
        .update_product(sku.clone(), json.into_inner().into())
        .await
        .map_err(|error| into_status_error(error, &sku))?;

    Ok(Json(product.into()))
}
