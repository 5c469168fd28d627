//! Product attribute values

mod errors;
mod handlers;

pub(crate) use handlers::*;
