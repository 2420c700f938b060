//! Module-class table of the home domain.
//!
//! One row per capability kind; every row gets both a base descriptor and
//! its `…Annc` announcement mirror. Short names follow the oneM2M
//! home-domain abbreviations.

use crate::error::RegistryError;
use crate::registry::ModuleRegistry;

/// Registry prefix shared by every home-domain capability.
pub const HOME_PREFIX: &str = "org.onem2m.home";

/// Qualifying namespace of the home-domain wire forms.
pub const HOME_NAMESPACE: &str = "http://www.onem2m.org/xml/protocols/homedomain";

/// Suffix marking the announced variant of a name.
pub const ANNC_SUFFIX: &str = "Annc";

/// `(longName, shortName)` rows of the home module classes.
pub const HOME_MODULES: &[(&str, &str)] = &[
    ("atmosphericPressureSensor", "atPSr"),
    ("audioVolume", "audVe"),
    ("binarySwitch", "binSh"),
    ("brewing", "brewg"),
    ("colour", "color"),
    ("doorStatus", "doorSs"),
    ("faultDetection", "fauDn"),
    ("foaming", "foamg"),
    ("lock", "lock"),
    ("personSensor", "perSr"),
    ("smokeSensor", "smoSr"),
    ("temperature", "tempe"),
    ("waterLevel", "watLl"),
];

/// Register every home module class and its announcement mirror.
///
/// # Errors
///
/// Returns the first [`RegistryError`] hit; with a fresh registry this only
/// happens if the table itself carries a duplicate, which is a fatal
/// bootstrap bug.
pub fn register_home_modules(registry: &mut ModuleRegistry) -> Result<(), RegistryError> {
    for (long_name, short_name) in HOME_MODULES {
        registry.register_module(*long_name, *short_name, HOME_NAMESPACE)?;
        registry.register_announcement(
            format!("{long_name}{ANNC_SUFFIX}"),
            format!("{short_name}{ANNC_SUFFIX}"),
            HOME_NAMESPACE,
            long_name,
        )?;
    }
    Ok(())
}
