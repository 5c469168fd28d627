//! Partial update merging.
//!
//! Update inputs use each type's zero value to mean "not supplied". An
//! explicit zero and an omitted field therefore look the same and both keep
//! the existing value.

pub trait ZeroValue {
    fn is_zero(&self) -> bool;
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for i32 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl ZeroValue for i64 {
    fn is_zero(&self) -> bool {
        *self == 0
    }
}

impl ZeroValue for f64 {
    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl<T> ZeroValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

/// The supplied value, unless it is zero, in which case the existing one.
pub fn overlay<T: ZeroValue>(input: T, existing: T) -> T {
    if input.is_zero() { existing } else { input }
}
