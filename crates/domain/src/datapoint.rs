//! Data point — a single mutable, integer-coded reading constrained to a
//! [`ValueDomain`].
//!
//! Every write goes through [`EnumDataPoint::assign`], which validates
//! membership before storing: a rejected code never reaches the stored
//! value, and a successful write is immediately visible through
//! [`EnumDataPoint::value`]. The data point is owned by exactly one
//! device-capability instance; any cross-thread sharing discipline belongs
//! to that owner.

use std::sync::Arc;

use crate::error::ValueError;
use crate::value_domain::ValueDomain;

/// A validated, integer-coded reading with a semantic name.
#[derive(Debug, Clone)]
pub struct EnumDataPoint {
    name: String,
    domain: Arc<ValueDomain>,
    value: i32,
}

impl EnumDataPoint {
    /// Create a data point holding `initial`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidEnumValue`] when `initial` is not a
    /// member of `domain`.
    pub fn new(
        name: impl Into<String>,
        domain: Arc<ValueDomain>,
        initial: i32,
    ) -> Result<Self, ValueError> {
        if !domain.contains(initial) {
            return Err(ValueError::InvalidEnumValue {
                domain: domain.name().to_string(),
                code: initial,
            });
        }
        Ok(Self {
            name: name.into(),
            domain,
            value: initial,
        })
    }

    /// Replace the stored code, returning the previous one so callers can
    /// detect changes.
    ///
    /// Accept-or-reject: on error the stored value is untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::InvalidEnumValue`] when `code` is not a member
    /// of this data point's domain.
    pub fn assign(&mut self, code: i32) -> Result<i32, ValueError> {
        if !self.domain.contains(code) {
            return Err(ValueError::InvalidEnumValue {
                domain: self.domain.name().to_string(),
                code,
            });
        }
        Ok(std::mem::replace(&mut self.value, code))
    }

    /// The current code. Always a member of the domain.
    #[must_use]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// The label of the current code, for logs and debug rendering.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.domain.label_of(self.value)
    }

    /// The semantic name, e.g. `"strength"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value domain constraining this data point.
    #[must_use]
    pub fn domain(&self) -> &Arc<ValueDomain> {
        &self.domain
    }
}
