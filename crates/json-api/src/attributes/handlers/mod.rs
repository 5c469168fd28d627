//! Attribute Value Handlers

pub(crate) mod delete_value;
pub(crate) mod update_value;
pub(crate) mod values;
