//! Wire schemas of the home-domain catalog.
//!
//! Field lists for every module class in
//! [`sdthub_domain::home::modules::HOME_MODULES`]. A base capability and
//! its announcement mirror share the same field list; only the root
//! element and container-definition reference differ, and those come from
//! the descriptors.

use sdthub_domain::descriptor::Descriptor;
use sdthub_domain::error::{NotFoundError, SdtHubError};
use sdthub_domain::home::domains;
use sdthub_domain::home::modules::ANNC_SUFFIX;
use sdthub_domain::registry::ModuleRegistry;

use crate::error::CodecError;
use crate::schema::{FieldSpec, Schema, SchemaRegistry};

/// Build the schema registry for a module registry populated with the home
/// catalog.
///
/// # Errors
///
/// Returns a wrapped [`NotFoundError`] when `modules` is missing a catalog
/// descriptor (the catalog was not registered first), or a domain error if
/// a value domain fails to build.
pub fn home_schema_registry(modules: &ModuleRegistry) -> Result<SchemaRegistry, CodecError> {
    let mut schemas = SchemaRegistry::new();

    register_pair(
        &mut schemas,
        modules,
        "atmosphericPressureSensor",
        vec![FieldSpec::number("atmosphericPressure")],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "audioVolume",
        vec![
            FieldSpec::integer("volumePercentage"),
            FieldSpec::bool("muteEnabled").optional(),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "binarySwitch",
        vec![FieldSpec::bool("powerState")],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "brewing",
        vec![
            FieldSpec::code("strength", domains::taste_strength().map_err(SdtHubError::from)?),
            FieldSpec::integer("cupsNumber").optional(),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "colour",
        vec![
            FieldSpec::integer("red"),
            FieldSpec::integer("green"),
            FieldSpec::integer("blue"),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "doorStatus",
        vec![
            FieldSpec::code("doorState", domains::door_state().map_err(SdtHubError::from)?),
            FieldSpec::text("openDuration").optional(),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "faultDetection",
        vec![
            FieldSpec::bool("status"),
            FieldSpec::integer("code").optional(),
            FieldSpec::text("description").optional(),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "foaming",
        vec![FieldSpec::code(
            "foamingStrength",
            domains::foam_strength().map_err(SdtHubError::from)?,
        )],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "lock",
        vec![FieldSpec::code(
            "lockState",
            domains::lock_state().map_err(SdtHubError::from)?,
        )],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "personSensor",
        vec![FieldSpec::bool("status")],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "smokeSensor",
        vec![
            FieldSpec::bool("alarm"),
            FieldSpec::integer("currentValue").optional(),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "temperature",
        vec![
            FieldSpec::number("currentTemperature"),
            FieldSpec::number("targetTemperature").optional(),
        ],
    )?;
    register_pair(
        &mut schemas,
        modules,
        "waterLevel",
        vec![FieldSpec::code(
            "liquidLevel",
            domains::liquid_level().map_err(SdtHubError::from)?,
        )],
    )?;

    Ok(schemas)
}

/// Register the base schema and its announcement twin, sharing the field
/// list.
fn register_pair(
    schemas: &mut SchemaRegistry,
    modules: &ModuleRegistry,
    long_name: &str,
    fields: Vec<FieldSpec>,
) -> Result<(), CodecError> {
    let base = descriptor(modules, long_name)?;
    let mirror = descriptor(modules, &format!("{long_name}{ANNC_SUFFIX}"))?;

    let mut builder = Schema::builder(base);
    for spec in &fields {
        builder = builder.field(spec.clone());
    }
    schemas.register(builder.build())?;

    let mut builder = Schema::builder(mirror);
    for spec in fields {
        builder = builder.field(spec);
    }
    schemas.register(builder.build())?;
    Ok(())
}

fn descriptor(modules: &ModuleRegistry, long_name: &str) -> Result<Descriptor, CodecError> {
    modules.by_long_name(long_name).cloned().ok_or_else(|| {
        CodecError::Domain(SdtHubError::from(NotFoundError {
            entity: "Descriptor",
            name: long_name.to_string(),
        }))
    })
}

#[cfg(test)]
mod tests {
    use sdthub_domain::home::modules::{HOME_MODULES, HOME_PREFIX, register_home_modules};
    use serde_json::json;

    use super::*;

    fn home_setup() -> (ModuleRegistry, SchemaRegistry) {
        let mut modules = ModuleRegistry::new(HOME_PREFIX);
        register_home_modules(&mut modules).unwrap();
        let schemas = home_schema_registry(&modules).unwrap();
        (modules, schemas)
    }

    #[test]
    fn should_build_schema_for_every_catalog_descriptor() {
        let (modules, schemas) = home_setup();
        assert_eq!(schemas.len(), modules.len());
        assert_eq!(schemas.len(), HOME_MODULES.len() * 2);
        for (_, short_name) in HOME_MODULES {
            assert!(schemas.by_root(short_name).is_some());
            assert!(schemas.by_root(&format!("{short_name}{ANNC_SUFFIX}")).is_some());
        }
    }

    #[test]
    fn should_share_fields_between_base_and_mirror() {
        let (_, schemas) = home_setup();
        let base = schemas.by_root("brewg").unwrap();
        let mirror = schemas.by_root("brewgAnnc").unwrap();
        assert_eq!(base.fields(), mirror.fields());
        assert_eq!(base.container_definition(), mirror.container_definition());
        assert_ne!(base.root(), mirror.root());
    }

    #[test]
    fn should_fail_when_catalog_was_not_registered() {
        let modules = ModuleRegistry::new(HOME_PREFIX);
        let result = home_schema_registry(&modules);
        assert!(matches!(result, Err(CodecError::Domain(_))));
    }

    #[test]
    fn should_round_trip_announced_pressure_sensor() {
        let (_, schemas) = home_setup();
        let wire = json!({
            "atPSrAnnc": {
                "cnd": "org.onem2m.home.moduleclass.atmosphericPressureSensor",
                "atmosphericPressure": 101.3,
            }
        });
        let mut decoded = schemas.decode(&wire).unwrap();
        let encoded = schemas.encode(&mut decoded).unwrap();
        assert_eq!(encoded, wire);
    }
}
