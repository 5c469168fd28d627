//! List filtering and pagination.

use jiff::Timestamp;
use tracing::debug;

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 25;
pub const MAX_LIMIT: u32 = 50;

/// Paging window plus optional creation and update bounds.
///
/// Parsing fails open: anything unparseable falls back to its default instead
/// of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryFilter {
    pub page: u32,
    pub limit: u32,
    pub created_after: Option<Timestamp>,
    pub created_before: Option<Timestamp>,
    pub updated_after: Option<Timestamp>,
    pub updated_before: Option<Timestamp>,
}

impl Default for QueryFilter {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            created_after: None,
            created_before: None,
            updated_after: None,
            updated_before: None,
        }
    }
}

impl QueryFilter {
    /// Build a filter from raw query string pairs. Unknown keys are ignored.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();

        for (key, value) in pairs {
            match key {
                "page" => filter.page = parse_positive(value).unwrap_or(DEFAULT_PAGE),
                "limit" => {
                    filter.limit = parse_positive(value).map_or(DEFAULT_LIMIT, |l| l.min(MAX_LIMIT));
                }
                "created_after" => filter.created_after = parse_unix_seconds(value),
                "created_before" => filter.created_before = parse_unix_seconds(value),
                "updated_after" => filter.updated_after = parse_unix_seconds(value),
                "updated_before" => filter.updated_before = parse_unix_seconds(value),
                _ => {}
            }
        }

        filter
    }

    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.limit)
    }
}

fn parse_positive(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(0) => None,
        Ok(parsed) => Some(parsed),
        Err(error) => {
            debug!(value, %error, "ignoring unparseable paging parameter");

            None
        }
    }
}

fn parse_unix_seconds(value: &str) -> Option<Timestamp> {
    let seconds = value.trim().parse::<i64>().ok()?;

    Timestamp::from_second(seconds).ok()
}

/// One page of a filtered list.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub page: u32,
    pub limit: u32,
    /// Rows matching the filter across all pages.
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(filter: &QueryFilter, count: u64, data: Vec<T>) -> Self {
        Self {
            page: filter.page,
            limit: filter.limit,
            count,
            data,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            page: self.page,
            limit: self.limit,
            count: self.count,
            data: self.data.into_iter().map(f).collect(),
        }
    }
}
