//! Extension traits

mod depot;
mod query_filter;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use query_filter::QueryFilterExt as _;
pub(crate) use result::ResultExt as _;
