//! Test Helpers

use jiff::Timestamp;

use crate::domain::{
    attributes::data::NewAttribute,
    discounts::{data::NewDiscount, records::DiscountType},
    products::data::NewProduct,
    progenitors::{data::NewProgenitor, records::Dimensions},
};

/// A valid product with the given attribute groups.
pub(crate) fn new_product(sku: &str, attributes: &[(&str, &[&str])]) -> NewProduct {
    NewProduct {
        sku: sku.to_owned(),
        name: format!("Product {sku}"),
        upc: None,
        quantity: 10,
        price: 99.99,
        cost: 50.0,
        progenitor: NewProgenitor {
            name: format!("Product {sku}"),
            description: "Test product".to_owned(),
            taxable: true,
            price: 99.99,
            product_dimensions: Dimensions {
                weight: 1.0,
                height: 2.0,
                width: 3.0,
                length: 4.0,
            },
            package_dimensions: Dimensions::default(),
        },
        attributes: attributes
            .iter()
            .map(|(name, values)| NewAttribute {
                name: (*name).to_owned(),
                values: values.iter().map(|value| (*value).to_owned()).collect(),
            })
            .collect(),
    }
}

pub(crate) fn new_discount(name: &str) -> NewDiscount {
    NewDiscount {
        name: name.to_owned(),
        discount_type: DiscountType::Percentage,
        amount: 10.0,
        product_id: None,
        starts_on: Timestamp::now(),
        expires_on: None,
        redemption_code: None,
        max_uses: None,
        login_required: false,
    }
}
