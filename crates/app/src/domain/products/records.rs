//! Product Records

use jiff::Timestamp;

use crate::{
    domain::progenitors::records::ProgenitorId,
    ids::TypedId,
    mapping::{Column, ColumnSet, MappedRecord, MappingError, RowCursor},
    query::Table,
};

/// Product Id
pub type ProductId = TypedId<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: ProductId,
    pub progenitor_id: ProgenitorId,
    pub sku: String,
    pub name: String,
    pub upc: Option<String>,
    pub quantity: i32,
    pub price: f64,
    pub cost: f64,
    pub created_on: Timestamp,
    pub updated_on: Option<Timestamp>,
    pub archived_on: Option<Timestamp>,
}

pub static PRODUCT_COLUMNS: ColumnSet = ColumnSet {
    table: Table::Products,
    columns: &[
        Column::required("id"),
        Column::required("product_progenitor_id"),
        Column::required("sku"),
        Column::required("name"),
        Column::nullable("upc"),
        Column::required("quantity"),
        Column::required("price"),
        Column::required("cost"),
        Column::required("created_on"),
        Column::nullable("updated_on"),
        Column::nullable("archived_on"),
    ],
};

impl MappedRecord for ProductRecord {
    const COLUMNS: &'static ColumnSet = &PRODUCT_COLUMNS;

    fn from_cursor(cursor: &RowCursor<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: ProductId::from_i64(cursor.get("id")?),
            progenitor_id: ProgenitorId::from_i64(cursor.get("product_progenitor_id")?),
            sku: cursor.get("sku")?,
            name: cursor.get("name")?,
            upc: cursor.get_optional("upc")?,
            quantity: cursor.get("quantity")?,
            price: cursor.get("price")?,
            cost: cursor.get("cost")?,
            created_on: cursor.timestamp("created_on")?,
            updated_on: cursor.optional_timestamp("updated_on")?,
            archived_on: cursor.optional_timestamp("archived_on")?,
        })
    }
}
