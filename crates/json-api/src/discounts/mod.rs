//! Discounts

mod errors;
mod handlers;
mod timestamps;

pub(crate) use handlers::*;
