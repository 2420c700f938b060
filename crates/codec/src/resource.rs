//! The codec-facing view of a resource instance.

use sdthub_domain::attribute::AttributeValue;
use sdthub_domain::error::SdtHubError;
use sdthub_domain::instance::ModuleInstance;

/// What the codec needs from anything it binds to the wire: descriptor
/// naming, field access by name, and the two serialization lifecycle hooks.
///
/// The hooks default to no-ops. Implementors override them for derived or
/// normalized fields that must be computed from other fields just before
/// transmission, or repaired just after parsing. The codec guarantees the
/// call order: `finalize_serialization` runs when all fields are final and
/// before the wire form is emitted; `finalize_deserialization` runs only
/// after every schema field has been populated.
pub trait WireResource {
    /// Wire root-element name.
    fn short_name(&self) -> &str;

    /// Container-definition URI emitted with, and checked against, the
    /// wire form.
    fn container_definition(&self) -> &str;

    /// Read a field by wire name. Enum-coded readings surface as
    /// [`AttributeValue::Int`].
    fn read_field(&self, name: &str) -> Option<AttributeValue>;

    /// Store a plain attribute parsed from the wire.
    ///
    /// # Errors
    ///
    /// Implementations may reject values that violate their own contracts.
    fn write_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), SdtHubError>;

    /// Write an enum code parsed from the wire, returning the previous
    /// code. Membership validation is the implementor's contract.
    ///
    /// # Errors
    ///
    /// Returns a domain error when the code is rejected or the data point
    /// does not exist.
    fn assign_code(&mut self, name: &str, code: i32) -> Result<i32, SdtHubError>;

    /// Hook invoked after all fields are final and before the wire form is
    /// emitted.
    fn finalize_serialization(&mut self) {}

    /// Hook invoked after all fields have been populated from a parsed
    /// wire form and before the instance reaches application code.
    fn finalize_deserialization(&mut self) {}
}

impl WireResource for ModuleInstance {
    fn short_name(&self) -> &str {
        self.descriptor().short_name()
    }

    fn container_definition(&self) -> &str {
        self.descriptor().container_definition()
    }

    fn read_field(&self, name: &str) -> Option<AttributeValue> {
        if let Some(datapoint) = self.datapoint(name) {
            return Some(AttributeValue::Int(i64::from(datapoint.value())));
        }
        self.attribute(name).cloned()
    }

    fn write_attribute(&mut self, name: &str, value: AttributeValue) -> Result<(), SdtHubError> {
        self.set_attribute(name, value);
        Ok(())
    }

    fn assign_code(&mut self, name: &str, code: i32) -> Result<i32, SdtHubError> {
        self.assign(name, code)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sdthub_domain::datapoint::EnumDataPoint;
    use sdthub_domain::descriptor::Descriptor;
    use sdthub_domain::registry::ModuleRegistry;
    use sdthub_domain::value_domain::ValueDomain;

    use super::*;

    fn instance() -> ModuleInstance {
        let mut modules = ModuleRegistry::new("org.onem2m.home");
        let descriptor = modules
            .register_module(
                "waterLevel",
                "watLl",
                "http://www.onem2m.org/xml/protocols/homedomain",
            )
            .unwrap();
        let level = Arc::new(
            ValueDomain::define("liquidLevel", [("zero", 1), ("medium", 3), ("maximum", 5)])
                .unwrap(),
        );
        ModuleInstance::builder(Descriptor::Module(descriptor))
            .datapoint(EnumDataPoint::new("liquidLevel", level, 3).unwrap())
            .build()
    }

    #[test]
    fn should_surface_datapoint_as_int_field() {
        let instance = instance();
        assert_eq!(
            instance.read_field("liquidLevel"),
            Some(AttributeValue::Int(3))
        );
        assert_eq!(instance.read_field("missing"), None);
    }

    #[test]
    fn should_expose_descriptor_naming() {
        let instance = instance();
        assert_eq!(WireResource::short_name(&instance), "watLl");
        assert_eq!(
            WireResource::container_definition(&instance),
            "org.onem2m.home.moduleclass.waterLevel"
        );
    }

    #[test]
    fn should_route_code_writes_through_validation() {
        let mut instance = instance();
        assert_eq!(instance.assign_code("liquidLevel", 5).unwrap(), 3);
        assert!(instance.assign_code("liquidLevel", 9).is_err());
        assert_eq!(
            instance.read_field("liquidLevel"),
            Some(AttributeValue::Int(5))
        );
    }

    #[test]
    fn should_store_plain_attributes() {
        let mut instance = instance();
        instance
            .write_attribute("note", AttributeValue::String("tank".to_string()))
            .unwrap();
        assert_eq!(
            instance.read_field("note"),
            Some(AttributeValue::String("tank".to_string()))
        );
    }
}
