//! List query parsing.

use salvo::Request;

use dairycart_app::filter::QueryFilter;

pub(crate) trait QueryFilterExt {
    /// Paging and time bounds from the query string. Never fails.
    fn query_filter(&self) -> QueryFilter;
}

impl QueryFilterExt for Request {
    fn query_filter(&self) -> QueryFilter {
        QueryFilter::from_pairs(
            self.queries()
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str())),
        )
    }
}
