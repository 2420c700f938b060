//! Typed attribute values attached to module instances.

use serde::{Deserialize, Serialize};

/// A single typed attribute value.
///
/// Covers the non-enum field kinds a wire schema can declare; enum-coded
/// readings live in [`EnumDataPoint`](crate::datapoint::EnumDataPoint)
/// instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl AttributeValue {
    /// Short name of the variant, used in type-mismatch diagnostics.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_string_variant_as_plain_string() {
        let val = AttributeValue::String("hello".to_string());
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "\"hello\"");
    }

    #[test]
    fn should_serialize_int_variant_as_number() {
        let val = AttributeValue::Int(42);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn should_serialize_bool_variant() {
        let val = AttributeValue::Bool(true);
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, "true");
    }

    #[test]
    fn should_report_variant_kind() {
        assert_eq!(AttributeValue::Float(21.5).kind(), "float");
        assert_eq!(AttributeValue::Int(3).kind(), "int");
    }

    #[test]
    fn should_compare_equal_values() {
        assert_eq!(AttributeValue::Int(10), AttributeValue::Int(10));
        assert_ne!(AttributeValue::Int(10), AttributeValue::Int(20));
    }
}
