//! Codec error types.

use sdthub_domain::error::SdtHubError;

/// Failure while binding a resource to or from its wire form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// No schema is registered for the given root element.
    #[error("no schema registered for root element `{0}`")]
    UnknownRootElement(String),
    /// Two schemas claim the same root element.
    #[error("a schema is already registered for root element `{0}`")]
    DuplicateSchema(String),
    /// The wire form does not carry the expected root element.
    #[error("wire form is missing root element `{expected}`")]
    MissingRootElement { expected: String },
    /// A required schema field is absent.
    #[error("missing required field `{field}`")]
    MissingField { field: String },
    /// A field carries a value of the wrong type.
    #[error("field `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },
    /// The wire form names a different container definition than the schema.
    #[error("container definition mismatch: expected `{expected}`, found `{found}`")]
    ContainerDefinitionMismatch { expected: String, found: String },
    /// A domain contract was violated while populating the resource,
    /// e.g. an enum code outside its value domain.
    #[error(transparent)]
    Domain(#[from] SdtHubError),
}

#[cfg(test)]
mod tests {
    use sdthub_domain::error::ValueError;

    use super::*;

    #[test]
    fn should_wrap_domain_errors() {
        let err: CodecError = SdtHubError::from(ValueError::InvalidEnumValue {
            domain: "tasteStrength".to_string(),
            code: 9,
        })
        .into();
        assert!(matches!(err, CodecError::Domain(_)));
        assert_eq!(
            err.to_string(),
            "code 9 is not a member of value domain `tasteStrength`"
        );
    }

    #[test]
    fn should_render_missing_field_message() {
        let err = CodecError::MissingField {
            field: "powerState".to_string(),
        };
        assert_eq!(err.to_string(), "missing required field `powerState`");
    }
}
