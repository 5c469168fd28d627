//! Progenitor Handlers

pub(crate) mod get;
