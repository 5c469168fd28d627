//! Create Product Handler

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::{
    attributes::data::NewAttribute,
    products::data::NewProduct,
    progenitors::{data::NewProgenitor, records::Dimensions},
};

use crate::{extensions::*, products::errors::into_status_error, products::get::ProductResponse};

/// Create Product Request
///
/// Creates the progenitor, its attributes and their values together with the
/// product.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub upc: Option<String>,
    #[serde(default)]
    pub quantity: i32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub taxable: bool,
    #[serde(default)]
    pub product_weight: f64,
    #[serde(default)]
    pub product_height: f64,
    #[serde(default)]
    pub product_width: f64,
    #[serde(default)]
    pub product_length: f64,
    #[serde(default)]
    pub package_weight: f64,
    #[serde(default)]
    pub package_height: f64,
    #[serde(default)]
    pub package_width: f64,
    #[serde(default)]
    pub package_length: f64,

    /// Attributes to create, each with its values
    #[serde(default)]
    pub attributes_and_values: Vec<CreateAttributeRequest>,
}

/// One attribute and its values, e.g. `color` with `red` and `blue`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateAttributeRequest {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        NewProduct {
            progenitor: NewProgenitor {
                name: request.name.clone(),
                description: request.description,
                taxable: request.taxable,
                price: request.price,
                product_dimensions: Dimensions {
                    weight: request.product_weight,
                    height: request.product_height,
                    width: request.product_width,
                    length: request.product_length,
                },
                package_dimensions: Dimensions {
                    weight: request.package_weight,
                    height: request.package_height,
                    width: request.package_width,
                    length: request.package_length,
                },
            },
            sku: request.sku,
            name: request.name,
            upc: request.upc.filter(|upc| !upc.is_empty()),
            quantity: request.quantity,
            price: request.price,
            cost: request.cost,
            attributes: request
                .attributes_and_values
                .into_iter()
                .map(|attribute| NewAttribute {
                    name: attribute.name,
                    values: attribute.values,
                })
                .collect(),
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid payload or duplicate SKU"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.create",
    skip(json, depot, res),
    fields(sku = tracing::field::Empty, attribute_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let request = json.into_inner();
    let sku = request.sku.clone();

    let span = tracing::Span::current();

    span.record("sku", tracing::field::display(&sku));
    span.record("attribute_count", request.attributes_and_values.len());

    let product = app
        .products
        .create_product(request.into())
        .await
        .map_err(|error| into_status_error(error, &sku))?;

    res.add_header(LOCATION, format!("/product/{}", product.record.sku), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}
