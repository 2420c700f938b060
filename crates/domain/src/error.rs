//! Common error types used across the workspace.
//!
//! Each concern has its own `thiserror` enum; `SdtHubError` composes them
//! via `#[from]` so callers can bubble everything with `?` and still match
//! on the precise failure.

/// Violation of a value-domain contract.
///
/// All variants are local, synchronous rejections: they signal a caller or
/// protocol bug (or out-of-range sensor data), never a transient fault, so
/// they are never retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    /// A code outside the closed set was written to a data point.
    #[error("code {code} is not a member of value domain `{domain}`")]
    InvalidEnumValue {
        /// Name of the value domain that rejected the code.
        domain: String,
        /// The rejected code.
        code: i32,
    },
    /// Two labels share one code within a single domain definition.
    #[error("duplicate code {code} (label `{label}`) in value domain `{domain}`")]
    DuplicateCode {
        domain: String,
        label: String,
        code: i32,
    },
    /// Codes are positive integers by convention; zero and below are rejected.
    #[error("non-positive code {code} (label `{label}`) in value domain `{domain}`")]
    NonPositiveCode {
        domain: String,
        label: String,
        code: i32,
    },
    /// A domain with no members can never hold a valid data point.
    #[error("value domain `{domain}` has no members")]
    EmptyDomain { domain: String },
}

/// Violation of a registry contract. Fatal to startup: the registry cannot
/// proceed with ambiguous or dangling names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A long or short name is already taken by another descriptor.
    #[error("descriptor name `{name}` is already registered")]
    DuplicateDescriptor { name: String },
    /// An announcement references a peer long name that is not registered.
    /// Indicates a registration-ordering bug: mirrors must be created only
    /// after their peer.
    #[error("announced peer `{long_name}` is not a registered module descriptor")]
    MissingPeerDescriptor { long_name: String },
}

/// A named domain object was looked up but does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} `{name}` not found")]
pub struct NotFoundError {
    /// Kind of object, e.g. `"DataPoint"`.
    pub entity: &'static str,
    /// The name that failed to resolve.
    pub name: String,
}

/// Workspace-level error wrapping every domain concern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SdtHubError {
    /// Value-domain violation.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// Registry violation.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// Lookup failure.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}
