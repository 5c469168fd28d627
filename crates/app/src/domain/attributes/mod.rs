//! Product attributes and their values.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::AttributesServiceError;
pub use service::*;
