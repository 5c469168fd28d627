//! Attributes Data

use crate::{
    domain::attributes::records::{AttributeRecord, AttributeValueRecord},
    merge::{ZeroValue, overlay},
};

/// An attribute together with its active values.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub record: AttributeRecord,
    pub values: Vec<AttributeValueRecord>,
}

/// New attribute and the values created alongside it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewAttribute {
    pub name: String,
    pub values: Vec<String>,
}

/// Attribute Value Update Data
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeValueUpdate {
    pub value: String,
}

impl AttributeValueUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_zero()
    }

    #[must_use]
    pub fn merge(&self, existing: &AttributeValueRecord) -> AttributeValueRecord {
        AttributeValueRecord {
            value: overlay(self.value.clone(), existing.value.clone()),
            ..existing.clone()
        }
    }
}
