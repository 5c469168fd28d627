//! Catalog domain, persistence and query modules shared by the HTTP server.

pub mod context;
pub mod database;
pub mod domain;
pub mod existence;
pub mod filter;
pub mod mapping;
pub mod merge;
pub mod query;
pub mod rounding;
pub mod validation;

#[cfg(test)]
mod test;

mod ids;

pub use ids::TypedId;
