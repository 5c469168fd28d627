//! Parameterized SQL construction.
//!
//! Builders here are pure: they return SQL text plus a positional argument
//! list and never touch the database. Identifiers come from [`Table`] and the
//! static column descriptors, caller-supplied values only ever travel as bound
//! arguments.

mod insert;
mod select;
mod update;
mod values;

pub use insert::{InsertBuilder, archive_query};
pub use select::{Selection, existence_query, filtered_count_query, filtered_list_query};
pub use update::UpdateBuilder;
pub use values::{SqlValue, Statement};

pub(crate) use values::Params;

/// Tables owned by this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Products,
    ProductProgenitors,
    ProductAttributes,
    ProductAttributeValues,
    Discounts,
}

impl Table {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::ProductProgenitors => "product_progenitors",
            Self::ProductAttributes => "product_attributes",
            Self::ProductAttributeValues => "product_attribute_values",
            Self::Discounts => "discounts",
        }
    }

    /// `table alias`, for `FROM` and `JOIN` clauses.
    #[must_use]
    pub fn aliased(self, alias: &str) -> String {
        format!("{} {alias}", self.as_str())
    }
}
