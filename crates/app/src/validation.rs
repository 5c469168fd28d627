//! Input validation shared by services.

use regex::Regex;

const SKU_PATTERN: &str = r"^[a-zA-Z\-_]+$";

/// Checks SKUs against the allowed character set: ASCII letters, hyphen and
/// underscore.
///
/// Compiled once at start-up and handed to the services that need it.
#[derive(Debug, Clone)]
pub struct SkuValidator {
    pattern: Regex,
}

impl SkuValidator {
    /// # Errors
    ///
    /// Returns an error if the SKU pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(SKU_PATTERN)?,
        })
    }

    #[must_use]
    pub fn is_valid(&self, sku: &str) -> bool {
        self.pattern.is_match(sku)
    }
}
