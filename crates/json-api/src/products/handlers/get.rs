//! Get Product Handler

use std::string::ToString;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dairycart_app::domain::{attributes::data::Attribute, products::data::Product};

use crate::{
    attributes::values::AttributeValueResponse, extensions::*, products::errors::into_status_error,
};

/// Product Response
///
/// The product's own columns with its progenitor's fields flattened in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    pub id: i64,
    pub product_progenitor_id: i64,
    pub sku: String,
    pub name: String,
    pub upc: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub cost: f64,

    /// Progenitor description
    pub description: String,

    /// Whether the progenitor is taxable
    pub taxable: bool,

    pub product_weight: f64,
    pub product_height: f64,
    pub product_width: f64,
    pub product_length: f64,
    pub package_weight: f64,
    pub package_height: f64,
    pub package_width: f64,
    pub package_length: f64,

    /// The date and time the product was created
    pub created_on: String,

    /// The date and time the product was last updated
    pub updated_on: Option<String>,

    /// Attributes of the progenitor; only present on single product reads
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let Product {
            record,
            progenitor,
            attributes,
        } = product;

        let dimensions = progenitor.product_dimensions;
        let package = progenitor.package_dimensions;

        Self {
            id: record.id.into_i64(),
            product_progenitor_id: record.progenitor_id.into_i64(),
            sku: record.sku,
            name: record.name,
            upc: record.upc,
            quantity: record.quantity,
            price: record.price,
            cost: record.cost,
            description: progenitor.description,
            taxable: progenitor.taxable,
            product_weight: dimensions.weight,
            product_height: dimensions.height,
            product_width: dimensions.width,
            product_length: dimensions.length,
            package_weight: package.weight,
            package_height: package.height,
            package_width: package.width,
            package_length: package.length,
            created_on: record.created_on.to_string(),
            updated_on: record.updated_on.as_ref().map(ToString::to_string),
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Attribute Response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct AttributeResponse {
    pub id: i64,
    pub name: String,
    pub values: Vec<AttributeValueResponse>,
}

impl From<Attribute> for AttributeResponse {
    fn from(attribute: Attribute) -> Self {
        Self {
            id: attribute.record.id.into_i64(),
            name: attribute.record.name,
            values: attribute.values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Get Product Handler
///
/// Returns a product with its progenitor and attributes.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    sku: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let sku = sku.into_inner();

    let product = app
        .products
        .get_product(sku.clone())
        .await
        .map_err(|error| into_status_error(error, &sku))?;

    Ok(Json(product.into()))
}
