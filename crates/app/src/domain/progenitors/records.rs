//! Progenitor Records

use jiff::Timestamp;

use crate::{
    ids::TypedId,
    mapping::{Column, ColumnSet, MappedRecord, MappingError, RowCursor},
    query::Table,
    rounding::round_stored,
};

/// Progenitor Id
pub type ProgenitorId = TypedId<ProgenitorRecord>;

/// Weight and bounding box of an item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Dimensions {
    pub weight: f64,
    pub height: f64,
    pub width: f64,
    pub length: f64,
}

impl Dimensions {
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            weight: round_stored(self.weight),
            height: round_stored(self.height),
            width: round_stored(self.width),
            length: round_stored(self.length),
        }
    }
}

/// Progenitor Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProgenitorRecord {
    pub id: ProgenitorId,
    pub name: String,
    pub description: String,
    pub taxable: bool,
    pub price: f64,
    pub product_dimensions: Dimensions,
    pub package_dimensions: Dimensions,
    pub created_on: Timestamp,
    pub updated_on: Option<Timestamp>,
    pub archived_on: Option<Timestamp>,
}

pub static PROGENITOR_COLUMNS: ColumnSet = ColumnSet {
    table: Table::ProductProgenitors,
    columns: &[
        Column::required("id"),
        Column::required("name"),
        Column::required("description"),
        Column::required("taxable"),
        Column::required("price"),
        Column::required("product_weight"),
        Column::required("product_height"),
        Column::required("product_width"),
        Column::required("product_length"),
        Column::required("package_weight"),
        Column::required("package_height"),
        Column::required("package_width"),
        Column::required("package_length"),
        Column::required("created_on"),
        Column::nullable("updated_on"),
        Column::nullable("archived_on"),
    ],
};

impl MappedRecord for ProgenitorRecord {
    const COLUMNS: &'static ColumnSet = &PROGENITOR_COLUMNS;

    fn from_cursor(cursor: &RowCursor<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: ProgenitorId::from_i64(cursor.get("id")?),
            name: cursor.get("name")?,
            description: cursor.get("description")?,
            taxable: cursor.get("taxable")?,
            price: cursor.get("price")?,
            product_dimensions: Dimensions {
                weight: cursor.get("product_weight")?,
                height: cursor.get("product_height")?,
                width: cursor.get("product_width")?,
                length: cursor.get("product_length")?,
            },
            package_dimensions: Dimensions {
                weight: cursor.get("package_weight")?,
                height: cursor.get("package_height")?,
                width: cursor.get("package_width")?,
                length: cursor.get("package_length")?,
            },
            created_on: cursor.timestamp("created_on")?,
            updated_on: cursor.optional_timestamp("updated_on")?,
            archived_on: cursor.optional_timestamp("archived_on")?,
        })
    }
}
