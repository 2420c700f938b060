//! # sdthub-codec
//!
//! Wire binding for sdthub resources.
//!
//! The original platform bound resources to their wire form through field
//! reflection and declarative tagging; here the binding is explicit. Every
//! capability registers a [`Schema`] (root element + ordered field list)
//! keyed by its descriptor's short name, and the JSON codec walks that
//! schema instead of the type's structure.
//!
//! The serialization lifecycle contract is preserved:
//! [`WireResource::finalize_serialization`] runs after all fields are final
//! and before the wire form is emitted;
//! [`WireResource::finalize_deserialization`] runs after every schema field
//! has been populated from the wire form and before the instance reaches
//! application code.
//!
//! ## Dependency rule
//! Depends on `sdthub-domain` only.

pub mod error;
pub mod home;
pub mod json;
pub mod resource;
pub mod schema;

pub use error::CodecError;
pub use json::{from_wire, to_wire};
pub use resource::WireResource;
pub use schema::{FieldKind, FieldSpec, Schema, SchemaRegistry};
