//! Explicit wire schemas — one per descriptor, keyed by root element.

use std::collections::HashMap;
use std::sync::Arc;

use sdthub_domain::datapoint::EnumDataPoint;
use sdthub_domain::descriptor::Descriptor;
use sdthub_domain::instance::ModuleInstance;
use sdthub_domain::value_domain::ValueDomain;

use crate::error::CodecError;

/// Wire type of one schema field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form string.
    Text,
    /// Whole number.
    Integer,
    /// Floating-point number.
    Number,
    /// Boolean flag.
    Bool,
    /// Integer code constrained to a closed value domain; binds to an
    /// [`EnumDataPoint`] on the instance.
    Code(Arc<ValueDomain>),
}

impl FieldKind {
    /// Human-readable name used in diagnostics.
    #[must_use]
    pub fn expected(&self) -> &'static str {
        match self {
            Self::Text => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Code(_) => "enum code",
        }
    }
}

/// One named field in a wire schema. Fields are required unless marked
/// [`optional`](Self::optional).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    required: bool,
}

impl FieldSpec {
    /// A required field of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: true,
        }
    }

    /// Shorthand for a required [`FieldKind::Text`] field.
    #[must_use]
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Shorthand for a required [`FieldKind::Integer`] field.
    #[must_use]
    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Shorthand for a required [`FieldKind::Number`] field.
    #[must_use]
    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Shorthand for a required [`FieldKind::Bool`] field.
    #[must_use]
    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Bool)
    }

    /// Shorthand for a required [`FieldKind::Code`] field.
    #[must_use]
    pub fn code(name: impl Into<String>, domain: Arc<ValueDomain>) -> Self {
        Self::new(name, FieldKind::Code(domain))
    }

    /// Mark the field as optional: absent on the wire is not an error.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Field name as it appears on the wire.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Wire type of the field.
    #[must_use]
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the field must be present on the wire.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }
}

/// Wire schema of one capability: its descriptor plus the ordered field
/// list the codec walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    descriptor: Descriptor,
    fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create a builder for constructing a [`Schema`].
    #[must_use]
    pub fn builder(descriptor: Descriptor) -> SchemaBuilder {
        SchemaBuilder {
            descriptor,
            fields: Vec::new(),
        }
    }

    /// Root element of the wire form — the descriptor's short name.
    #[must_use]
    pub fn root(&self) -> &str {
        self.descriptor.short_name()
    }

    /// Qualifying namespace, carried for the platform's use.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.descriptor.namespace()
    }

    /// Container definition the wire form must agree with.
    #[must_use]
    pub fn container_definition(&self) -> &str {
        self.descriptor.container_definition()
    }

    /// The descriptor this schema binds.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// Fields in wire order.
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Build a default instance of this schema: enum data points start at
    /// the first code of their domain, plain attributes start absent.
    ///
    /// # Errors
    ///
    /// Propagates a domain error if a data point cannot be constructed;
    /// with a well-formed schema this does not happen, since the default
    /// code is taken from the domain itself.
    pub fn instantiate(&self) -> Result<ModuleInstance, CodecError> {
        let mut builder = ModuleInstance::builder(self.descriptor.clone());
        for spec in &self.fields {
            if let FieldKind::Code(domain) = &spec.kind {
                let datapoint = EnumDataPoint::new(
                    spec.name.clone(),
                    Arc::clone(domain),
                    domain.first_code(),
                )
                .map_err(sdthub_domain::error::SdtHubError::from)?;
                builder = builder.datapoint(datapoint);
            }
        }
        Ok(builder.build())
    }
}

/// Step-by-step builder for [`Schema`].
#[derive(Debug)]
pub struct SchemaBuilder {
    descriptor: Descriptor,
    fields: Vec<FieldSpec>,
}

impl SchemaBuilder {
    /// Append a field; wire order follows call order.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Consume the builder and return a [`Schema`].
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            descriptor: self.descriptor,
            fields: self.fields,
        }
    }
}

/// Registry of wire schemas, keyed by root element.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    by_root: HashMap<String, Arc<Schema>>,
}

impl SchemaRegistry {
    /// Create an empty schema registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema under its root element.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::DuplicateSchema`] when the root element is
    /// already claimed; the registry is unchanged in that case.
    pub fn register(&mut self, schema: Schema) -> Result<Arc<Schema>, CodecError> {
        let root = schema.root().to_string();
        if self.by_root.contains_key(&root) {
            return Err(CodecError::DuplicateSchema(root));
        }
        let schema = Arc::new(schema);
        self.by_root.insert(root, Arc::clone(&schema));
        Ok(schema)
    }

    /// Resolve a schema by root element.
    #[must_use]
    pub fn by_root(&self, root: &str) -> Option<&Arc<Schema>> {
        self.by_root.get(root)
    }

    /// Iterate all registered schemas.
    pub fn schemas(&self) -> impl Iterator<Item = &Arc<Schema>> {
        self.by_root.values()
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_root.len()
    }

    /// Whether no schema has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_root.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use sdthub_domain::registry::ModuleRegistry;
    use sdthub_domain::value_domain::ValueDomain;

    use super::*;

    const NAMESPACE: &str = "http://www.onem2m.org/xml/protocols/homedomain";

    fn brewing_schema() -> Schema {
        let mut modules = ModuleRegistry::new("org.onem2m.home");
        let descriptor = modules
            .register_module("brewing", "brewg", NAMESPACE)
            .unwrap();
        let strength = Arc::new(
            ValueDomain::define("tasteStrength", [("zero", 1), ("medium", 3), ("maximum", 5)])
                .unwrap(),
        );
        Schema::builder(Descriptor::Module(descriptor))
            .field(FieldSpec::code("strength", strength))
            .field(FieldSpec::integer("cupsNumber").optional())
            .build()
    }

    #[test]
    fn should_expose_descriptor_naming_through_schema() {
        let schema = brewing_schema();
        assert_eq!(schema.root(), "brewg");
        assert_eq!(schema.namespace(), NAMESPACE);
        assert_eq!(
            schema.container_definition(),
            "org.onem2m.home.moduleclass.brewing"
        );
        assert_eq!(schema.fields().len(), 2);
    }

    #[test]
    fn should_instantiate_default_datapoints_at_first_code() {
        let schema = brewing_schema();
        let instance = schema.instantiate().unwrap();
        assert_eq!(instance.datapoint("strength").unwrap().value(), 1);
        assert!(instance.attribute("cupsNumber").is_none());
    }

    #[test]
    fn should_reject_duplicate_root_element() {
        let mut registry = SchemaRegistry::new();
        registry.register(brewing_schema()).unwrap();
        let result = registry.register(brewing_schema());
        assert_eq!(
            result.unwrap_err(),
            CodecError::DuplicateSchema("brewg".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn should_resolve_schema_by_root_element() {
        let mut registry = SchemaRegistry::new();
        registry.register(brewing_schema()).unwrap();
        assert!(registry.by_root("brewg").is_some());
        assert!(registry.by_root("binSh").is_none());
        assert!(!registry.is_empty());
    }
}
