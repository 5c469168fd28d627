//! Product progenitors: the fields shared by every variant of a product.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ProgenitorsServiceError;
pub use service::*;
