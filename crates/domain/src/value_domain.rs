//! Value domain — the closed set of legal integer-coded values for one
//! datapoint kind.
//!
//! Values travel on the wire as small integer codes rather than labels, so
//! encodings stay compact and survive label renames across protocol
//! versions. A domain is defined once, validated at construction, and never
//! mutated afterwards; it is shared read-only (via [`std::sync::Arc`]) by
//! every data point of that kind.

use serde::Serialize;

use crate::error::ValueError;

/// One named code inside a [`ValueDomain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueEntry {
    /// Human-readable label, e.g. `"sensitive"`.
    pub label: String,
    /// Wire code, a positive integer.
    pub code: i32,
}

/// An ordered, closed set of (label, code) pairs.
///
/// Immutable once defined: there is no way to add or remove members after
/// [`ValueDomain::define`] returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueDomain {
    name: String,
    entries: Vec<ValueEntry>,
}

impl ValueDomain {
    /// Define a new domain from ordered (label, code) pairs.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::EmptyDomain`] when `pairs` is empty,
    /// [`ValueError::NonPositiveCode`] when a code is below 1, and
    /// [`ValueError::DuplicateCode`] when two labels share a code.
    pub fn define<L, I>(name: impl Into<String>, pairs: I) -> Result<Self, ValueError>
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, i32)>,
    {
        let name = name.into();
        let mut entries: Vec<ValueEntry> = Vec::new();

        for (label, code) in pairs {
            let label = label.into();
            if code < 1 {
                return Err(ValueError::NonPositiveCode {
                    domain: name,
                    label,
                    code,
                });
            }
            if entries.iter().any(|entry| entry.code == code) {
                return Err(ValueError::DuplicateCode {
                    domain: name,
                    label,
                    code,
                });
            }
            entries.push(ValueEntry { label, code });
        }

        if entries.is_empty() {
            return Err(ValueError::EmptyDomain { domain: name });
        }

        Ok(Self { name, entries })
    }

    /// The domain's name, e.g. `"tasteStrength"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `code` is a member of this domain.
    #[must_use]
    pub fn contains(&self, code: i32) -> bool {
        self.entries.iter().any(|entry| entry.code == code)
    }

    /// The label attached to `code`, if `code` is a member.
    #[must_use]
    pub fn label_of(&self, code: i32) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.label.as_str())
    }

    /// The code attached to `label`, if `label` is a member.
    #[must_use]
    pub fn code_of(&self, label: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.code)
    }

    /// The first code in definition order, used as the default for freshly
    /// instantiated data points.
    #[must_use]
    pub fn first_code(&self) -> i32 {
        // entries is non-empty by construction
        self.entries[0].code
    }

    /// All members in definition order.
    #[must_use]
    pub fn entries(&self) -> &[ValueEntry] {
        &self.entries
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the domain has no members. Always `false` for a constructed
    /// domain; present for API completeness alongside [`len`](Self::len).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
