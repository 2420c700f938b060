//! JSON wire binding.
//!
//! Wire layout: a single-key object whose key is the root element (the
//! descriptor's short name) and whose body carries the container
//! definition under `cnd` plus the schema fields in declaration order:
//!
//! ```json
//! { "atPSrAnnc": { "cnd": "org.onem2m.home.moduleclass.atmosphericPressureSensor",
//!                  "atmosphericPressure": 3.5 } }
//! ```
//!
//! Hook ordering is enforced here and only here: `finalize_serialization`
//! is called before any field is read for emission, and
//! `finalize_deserialization` is called after the last field has been
//! written.

use serde_json::{Map, Value};

use sdthub_domain::attribute::AttributeValue;
use sdthub_domain::instance::ModuleInstance;

use crate::error::CodecError;
use crate::resource::WireResource;
use crate::schema::{FieldKind, FieldSpec, Schema, SchemaRegistry};

/// Wire short name of the container-definition attribute.
pub const CONTAINER_DEFINITION: &str = "cnd";

/// Emit the wire form of `resource` according to `schema`.
///
/// # Errors
///
/// Returns [`CodecError::UnknownRootElement`] when the resource and schema
/// disagree on the root element, [`CodecError::MissingField`] when a
/// required field is absent from the resource, and
/// [`CodecError::TypeMismatch`] when a field value does not fit its
/// declared kind.
pub fn to_wire<R: WireResource>(resource: &mut R, schema: &Schema) -> Result<Value, CodecError> {
    if resource.short_name() != schema.root() {
        return Err(CodecError::UnknownRootElement(
            resource.short_name().to_string(),
        ));
    }

    // Fields are final at this point; the hook may still derive
    // normalized ones before anything is read for emission.
    resource.finalize_serialization();

    let mut body = Map::new();
    body.insert(
        CONTAINER_DEFINITION.to_string(),
        Value::String(resource.container_definition().to_string()),
    );
    for spec in schema.fields() {
        match resource.read_field(spec.name()) {
            Some(value) => {
                body.insert(spec.name().to_string(), field_to_json(spec, &value)?);
            }
            None if spec.is_required() => {
                return Err(CodecError::MissingField {
                    field: spec.name().to_string(),
                });
            }
            None => {}
        }
    }

    tracing::debug!(root = schema.root(), "emitted wire form");
    let mut wire = Map::new();
    wire.insert(schema.root().to_string(), Value::Object(body));
    Ok(Value::Object(wire))
}

/// Populate `resource` from the wire form `wire` according to `schema`.
///
/// Every schema field is written before `finalize_deserialization` runs.
///
/// # Errors
///
/// Returns [`CodecError::MissingRootElement`] when `wire` does not carry
/// the schema's root element, [`CodecError::ContainerDefinitionMismatch`]
/// when the wire names a different container definition,
/// [`CodecError::MissingField`] / [`CodecError::TypeMismatch`] on malformed
/// fields, and a wrapped domain error when an enum code is rejected.
pub fn from_wire<R: WireResource>(
    resource: &mut R,
    schema: &Schema,
    wire: &Value,
) -> Result<(), CodecError> {
    let body = wire
        .get(schema.root())
        .and_then(Value::as_object)
        .ok_or_else(|| CodecError::MissingRootElement {
            expected: schema.root().to_string(),
        })?;

    if let Some(found) = body.get(CONTAINER_DEFINITION).and_then(Value::as_str)
        && found != schema.container_definition()
    {
        return Err(CodecError::ContainerDefinitionMismatch {
            expected: schema.container_definition().to_string(),
            found: found.to_string(),
        });
    }

    for spec in schema.fields() {
        match body.get(spec.name()) {
            Some(value) => write_field(resource, spec, value)?,
            None if spec.is_required() => {
                return Err(CodecError::MissingField {
                    field: spec.name().to_string(),
                });
            }
            None => {}
        }
    }

    tracing::debug!(root = schema.root(), "parsed wire form");
    resource.finalize_deserialization();
    Ok(())
}

impl SchemaRegistry {
    /// Emit the wire form of `resource`, resolving its schema by the
    /// resource's own root element.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownRootElement`] when no schema is
    /// registered for the resource, plus anything [`to_wire`] returns.
    pub fn encode<R: WireResource>(&self, resource: &mut R) -> Result<Value, CodecError> {
        let schema = self
            .by_root(resource.short_name())
            .ok_or_else(|| CodecError::UnknownRootElement(resource.short_name().to_string()))?;
        to_wire(resource, schema)
    }

    /// Resolve the root element of `wire` against the registered schemas
    /// and return a fully populated default instance.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::UnknownRootElement`] when no key of `wire`
    /// matches a registered schema, plus anything [`from_wire`] returns.
    pub fn decode(&self, wire: &Value) -> Result<ModuleInstance, CodecError> {
        let keys = wire.as_object().map(Map::keys);
        let schema = keys
            .into_iter()
            .flatten()
            .find_map(|root| self.by_root(root))
            .ok_or_else(|| {
                CodecError::UnknownRootElement(
                    wire.as_object()
                        .and_then(|body| body.keys().next().cloned())
                        .unwrap_or_default(),
                )
            })?
            .clone();

        let mut instance = schema.instantiate()?;
        from_wire(&mut instance, &schema, wire)?;
        Ok(instance)
    }
}

fn field_to_json(spec: &FieldSpec, value: &AttributeValue) -> Result<Value, CodecError> {
    let mismatch = || CodecError::TypeMismatch {
        field: spec.name().to_string(),
        expected: spec.kind().expected(),
    };
    match (spec.kind(), value) {
        (FieldKind::Text, AttributeValue::String(text)) => Ok(Value::String(text.clone())),
        (FieldKind::Integer | FieldKind::Code(_), AttributeValue::Int(int)) => {
            Ok(Value::Number((*int).into()))
        }
        (FieldKind::Number, AttributeValue::Float(float)) => serde_json::Number::from_f64(*float)
            .map(Value::Number)
            .ok_or_else(mismatch),
        (FieldKind::Number, AttributeValue::Int(int)) => Ok(Value::Number((*int).into())),
        (FieldKind::Bool, AttributeValue::Bool(flag)) => Ok(Value::Bool(*flag)),
        _ => Err(mismatch()),
    }
}

fn write_field<R: WireResource>(
    resource: &mut R,
    spec: &FieldSpec,
    value: &Value,
) -> Result<(), CodecError> {
    let mismatch = || CodecError::TypeMismatch {
        field: spec.name().to_string(),
        expected: spec.kind().expected(),
    };
    match spec.kind() {
        FieldKind::Code(_) => {
            let code = value
                .as_i64()
                .and_then(|code| i32::try_from(code).ok())
                .ok_or_else(mismatch)?;
            resource.assign_code(spec.name(), code)?;
        }
        FieldKind::Text => {
            let text = value.as_str().ok_or_else(mismatch)?;
            resource.write_attribute(spec.name(), AttributeValue::String(text.to_string()))?;
        }
        FieldKind::Integer => {
            let int = value.as_i64().ok_or_else(mismatch)?;
            resource.write_attribute(spec.name(), AttributeValue::Int(int))?;
        }
        FieldKind::Number => {
            let float = value.as_f64().ok_or_else(mismatch)?;
            resource.write_attribute(spec.name(), AttributeValue::Float(float))?;
        }
        FieldKind::Bool => {
            let flag = value.as_bool().ok_or_else(mismatch)?;
            resource.write_attribute(spec.name(), AttributeValue::Bool(flag))?;
        }
    }
    Ok(())
}
