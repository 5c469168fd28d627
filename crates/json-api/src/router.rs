//! App Router

use salvo::Router;

use crate::{attributes, discounts, products, progenitors};

/// Catalog and discount routes.
pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("product")
                .post(products::create::handler)
                .push(
                    Router::with_path("{sku}")
                        .head(products::exists::handler)
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(Router::with_path("products").get(products::index::handler))
        .push(Router::with_path("product_progenitor/{progenitor}").get(progenitors::get::handler))
        .push(
            Router::with_path("product_attributes/{attribute}/values")
                .get(attributes::values::handler),
        )
        .push(
            Router::with_path("product_attribute_values/{value}")
                .put(attributes::update_value::handler)
                .delete(attributes::delete_value::handler),
        )
        .push(
            Router::with_path("discount")
                .post(discounts::create::handler)
                .push(
                    Router::with_path("{discount}")
                        .get(discounts::get::handler)
                        .put(discounts::update::handler)
                        .delete(discounts::delete::handler),
                ),
        )
        .push(Router::with_path("discounts").get(discounts::index::handler))
}
