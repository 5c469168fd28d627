//! Catalog Domain Concerns

pub mod attributes;
pub mod discounts;
pub mod products;
pub mod progenitors;
