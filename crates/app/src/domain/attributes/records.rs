//! Attribute Records

use jiff::Timestamp;

use crate::{
    domain::progenitors::records::ProgenitorId,
    ids::TypedId,
    mapping::{Column, ColumnSet, MappedRecord, MappingError, RowCursor},
    query::Table,
};

/// Attribute Id
pub type AttributeId = TypedId<AttributeRecord>;

/// Attribute Value Id
pub type AttributeValueId = TypedId<AttributeValueRecord>;

/// Attribute Record
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeRecord {
    pub id: AttributeId,
    pub progenitor_id: ProgenitorId,
    pub name: String,
    pub created_on: Timestamp,
    pub updated_on: Option<Timestamp>,
    pub archived_on: Option<Timestamp>,
}

/// Attribute Value Record
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeValueRecord {
    pub id: AttributeValueId,
    pub attribute_id: AttributeId,
    pub value: String,
    pub created_on: Timestamp,
    pub updated_on: Option<Timestamp>,
    pub archived_on: Option<Timestamp>,
}

pub static ATTRIBUTE_COLUMNS: ColumnSet = ColumnSet {
    table: Table::ProductAttributes,
    columns: &[
        Column::required("id"),
        Column::required("product_progenitor_id"),
        Column::required("name"),
        Column::required("created_on"),
        Column::nullable("updated_on"),
        Column::nullable("archived_on"),
    ],
};

pub static ATTRIBUTE_VALUE_COLUMNS: ColumnSet = ColumnSet {
    table: Table::ProductAttributeValues,
    columns: &[
        Column::required("id"),
        Column::required("product_attribute_id"),
        Column::required("value"),
        Column::required("created_on"),
        Column::nullable("updated_on"),
        Column::nullable("archived_on"),
    ],
};

impl MappedRecord for AttributeRecord {
    const COLUMNS: &'static ColumnSet = &ATTRIBUTE_COLUMNS;

    fn from_cursor(cursor: &RowCursor<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: AttributeId::from_i64(cursor.get("id")?),
            progenitor_id: ProgenitorId::from_i64(cursor.get("product_progenitor_id")?),
            name: cursor.get("name")?,
            created_on: cursor.timestamp("created_on")?,
            updated_on: cursor.optional_timestamp("updated_on")?,
            archived_on: cursor.optional_timestamp("archived_on")?,
        })
    }
}

impl MappedRecord for AttributeValueRecord {
    const COLUMNS: &'static ColumnSet = &ATTRIBUTE_VALUE_COLUMNS;

    fn from_cursor(cursor: &RowCursor<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: AttributeValueId::from_i64(cursor.get("id")?),
            attribute_id: AttributeId::from_i64(cursor.get("product_attribute_id")?),
            value: cursor.get("value")?,
            created_on: cursor.timestamp("created_on")?,
            updated_on: cursor.optional_timestamp("updated_on")?,
            archived_on: cursor.optional_timestamp("archived_on")?,
        })
    }
}
