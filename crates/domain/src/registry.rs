//! Module registry — the explicit, process-scoped store of descriptors.
//!
//! One registry instance is built during single-threaded bootstrap, filled
//! with every capability the broker knows about, and then only read.
//! Registration takes `&mut self`, so concurrent registration is a compile
//! error rather than a runtime hazard; lookups take `&self` and are safe to
//! share freely once bootstrap is done.
//!
//! A failed registration leaves the registry untouched: both name checks
//! happen before either map is written.

use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::{AnnouncementDescriptor, Descriptor, ModuleDescriptor};
use crate::error::RegistryError;

/// Infix between the registry prefix and the long name in a
/// container-definition URI.
const MODULECLASS_INFIX: &str = "moduleclass";

/// Process-scoped descriptor registry with dual-key lookup.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    prefix: String,
    by_long: HashMap<String, Descriptor>,
    by_short: HashMap<String, Descriptor>,
}

impl ModuleRegistry {
    /// Create an empty registry for the given namespace prefix,
    /// e.g. `"org.onem2m.home"`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            by_long: HashMap::new(),
            by_short: HashMap::new(),
        }
    }

    /// The namespace prefix shared by all capabilities in this registry.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Register a base capability descriptor.
    ///
    /// The container definition is computed here, once, as
    /// `"<prefix>.moduleclass.<longName>"` and cached on the descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateDescriptor`] when either name is
    /// already registered, in which case nothing is stored.
    pub fn register_module(
        &mut self,
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Arc<ModuleDescriptor>, RegistryError> {
        let long_name = long_name.into();
        let short_name = short_name.into();
        self.ensure_names_free(&long_name, &short_name)?;

        let container_definition = self.container_definition_for(&long_name);
        let descriptor = Arc::new(ModuleDescriptor::new(
            long_name.clone(),
            short_name.clone(),
            namespace.into(),
            container_definition,
        ));
        self.insert(long_name, short_name, Descriptor::Module(Arc::clone(&descriptor)));
        Ok(descriptor)
    }

    /// Register the announcement mirror of an already-registered capability.
    ///
    /// The mirror's container definition is copied from the peer's cached
    /// value — it is never recomputed from the mirror's own long name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingPeerDescriptor`] when `peer_long_name`
    /// does not resolve to a base module descriptor, and
    /// [`RegistryError::DuplicateDescriptor`] when either own name is already
    /// registered. In both cases nothing is stored.
    pub fn register_announcement(
        &mut self,
        long_name: impl Into<String>,
        short_name: impl Into<String>,
        namespace: impl Into<String>,
        peer_long_name: &str,
    ) -> Result<Arc<AnnouncementDescriptor>, RegistryError> {
        let long_name = long_name.into();
        let short_name = short_name.into();

        let peer = match self.by_long.get(peer_long_name) {
            Some(Descriptor::Module(peer)) => Arc::clone(peer),
            // An announcement cannot mirror another announcement.
            Some(Descriptor::Announcement(_)) | None => {
                return Err(RegistryError::MissingPeerDescriptor {
                    long_name: peer_long_name.to_string(),
                });
            }
        };
        self.ensure_names_free(&long_name, &short_name)?;

        let descriptor = Arc::new(AnnouncementDescriptor::new(
            long_name.clone(),
            short_name.clone(),
            namespace.into(),
            peer.container_definition().to_string(),
            peer.long_name().to_string(),
        ));
        self.insert(
            long_name,
            short_name,
            Descriptor::Announcement(Arc::clone(&descriptor)),
        );
        Ok(descriptor)
    }

    /// Resolve a descriptor by its long name.
    #[must_use]
    pub fn by_long_name(&self, long_name: &str) -> Option<&Descriptor> {
        self.by_long.get(long_name)
    }

    /// Resolve a descriptor by its short (wire) name.
    #[must_use]
    pub fn by_short_name(&self, short_name: &str) -> Option<&Descriptor> {
        self.by_short.get(short_name)
    }

    /// Enumerate every registered descriptor, for discovery.
    pub fn descriptors(&self) -> impl Iterator<Item = &Descriptor> {
        self.by_long.values()
    }

    /// Number of registered descriptors (mirrors included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_long.len()
    }

    /// Whether nothing has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_long.is_empty()
    }

    fn container_definition_for(&self, long_name: &str) -> String {
        format!("{}.{MODULECLASS_INFIX}.{long_name}", self.prefix)
    }

    fn ensure_names_free(&self, long_name: &str, short_name: &str) -> Result<(), RegistryError> {
        if self.by_long.contains_key(long_name) {
            return Err(RegistryError::DuplicateDescriptor {
                name: long_name.to_string(),
            });
        }
        if self.by_short.contains_key(short_name) {
            return Err(RegistryError::DuplicateDescriptor {
                name: short_name.to_string(),
            });
        }
        Ok(())
    }

    fn insert(&mut self, long_name: String, short_name: String, descriptor: Descriptor) {
        self.by_long.insert(long_name, descriptor.clone());
        self.by_short.insert(short_name, descriptor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMESPACE: &str = "http://www.onem2m.org/xml/protocols/homedomain";

    fn registry() -> ModuleRegistry {
        ModuleRegistry::new("org.onem2m.home")
    }

    #[test]
    fn should_register_module_and_derive_container_definition() {
        let mut registry = registry();
        let descriptor = registry
            .register_module("atmosphericPressureSensor", "atPSr", NAMESPACE)
            .unwrap();

        assert_eq!(descriptor.long_name(), "atmosphericPressureSensor");
        assert_eq!(descriptor.short_name(), "atPSr");
        assert_eq!(descriptor.namespace(), NAMESPACE);
        assert_eq!(
            descriptor.container_definition(),
            "org.onem2m.home.moduleclass.atmosphericPressureSensor"
        );
    }

    #[test]
    fn should_look_up_descriptor_by_either_name() {
        let mut registry = registry();
        registry
            .register_module("binarySwitch", "binSh", NAMESPACE)
            .unwrap();

        let by_long = registry.by_long_name("binarySwitch").unwrap();
        let by_short = registry.by_short_name("binSh").unwrap();
        assert_eq!(by_long.short_name(), "binSh");
        assert_eq!(by_short.long_name(), "binarySwitch");
    }

    #[test]
    fn should_reject_duplicate_long_name() {
        let mut registry = registry();
        registry
            .register_module("binarySwitch", "binSh", NAMESPACE)
            .unwrap();
        let result = registry.register_module("binarySwitch", "other", NAMESPACE);
        assert_eq!(
            result.unwrap_err(),
            RegistryError::DuplicateDescriptor {
                name: "binarySwitch".to_string(),
            }
        );
    }

    #[test]
    fn should_reject_duplicate_short_name() {
        let mut registry = registry();
        registry
            .register_module("binarySwitch", "binSh", NAMESPACE)
            .unwrap();
        let result = registry.register_module("other", "binSh", NAMESPACE);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateDescriptor { name }) if name == "binSh"
        ));
    }

    #[test]
    fn should_reject_duplicate_long_name_even_with_different_namespace() {
        let mut registry = registry();
        registry
            .register_module("binarySwitch", "binSh", NAMESPACE)
            .unwrap();
        let result = registry.register_module("binarySwitch", "other", "urn:other:namespace");
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateDescriptor { .. })
        ));
    }

    #[test]
    fn should_borrow_container_definition_from_peer_for_announcement() {
        let mut registry = registry();
        registry
            .register_module("atmosphericPressureSensor", "atPSr", NAMESPACE)
            .unwrap();
        let mirror = registry
            .register_announcement(
                "atmosphericPressureSensorAnnc",
                "atPSrAnnc",
                NAMESPACE,
                "atmosphericPressureSensor",
            )
            .unwrap();

        // Derived from the peer's long name, not the mirror's own.
        assert_eq!(
            mirror.container_definition(),
            "org.onem2m.home.moduleclass.atmosphericPressureSensor"
        );
        assert_eq!(mirror.peer_long_name(), "atmosphericPressureSensor");
        assert_eq!(mirror.long_name(), "atmosphericPressureSensorAnnc");
        assert_eq!(mirror.short_name(), "atPSrAnnc");
    }

    #[test]
    fn should_register_nothing_when_peer_is_missing() {
        let mut registry = registry();
        let result =
            registry.register_announcement("ghostAnnc", "ghsAnnc", NAMESPACE, "doesNotExist");

        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingPeerDescriptor {
                long_name: "doesNotExist".to_string(),
            }
        );
        assert!(registry.by_long_name("ghostAnnc").is_none());
        assert!(registry.by_short_name("ghsAnnc").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn should_reject_announcement_peering_another_announcement() {
        let mut registry = registry();
        registry
            .register_module("personSensor", "perSr", NAMESPACE)
            .unwrap();
        registry
            .register_announcement("personSensorAnnc", "perSrAnnc", NAMESPACE, "personSensor")
            .unwrap();
        let result = registry.register_announcement(
            "personSensorAnncAnnc",
            "perSrAnncAnnc",
            NAMESPACE,
            "personSensorAnnc",
        );
        assert!(matches!(
            result,
            Err(RegistryError::MissingPeerDescriptor { .. })
        ));
    }

    #[test]
    fn should_leave_registry_unchanged_when_duplicate_rejected() {
        let mut registry = registry();
        registry
            .register_module("binarySwitch", "binSh", NAMESPACE)
            .unwrap();
        let before = registry.len();
        // Fresh long name, colliding short name: neither map may change.
        let result = registry.register_module("otherSwitch", "binSh", NAMESPACE);
        assert!(result.is_err());
        assert_eq!(registry.len(), before);
        assert!(registry.by_long_name("otherSwitch").is_none());
    }

    #[test]
    fn should_enumerate_all_descriptors_for_discovery() {
        let mut registry = registry();
        registry
            .register_module("binarySwitch", "binSh", NAMESPACE)
            .unwrap();
        registry
            .register_module("personSensor", "perSr", NAMESPACE)
            .unwrap();
        registry
            .register_announcement("personSensorAnnc", "perSrAnnc", NAMESPACE, "personSensor")
            .unwrap();

        assert_eq!(registry.len(), 3);
        let mut short_names: Vec<&str> = registry
            .descriptors()
            .map(Descriptor::short_name)
            .collect();
        short_names.sort_unstable();
        assert_eq!(short_names, vec!["binSh", "perSr", "perSrAnnc"]);
    }

    #[test]
    fn should_keep_long_and_short_names_unique_across_both_kinds() {
        let mut registry = registry();
        registry
            .register_module("personSensor", "perSr", NAMESPACE)
            .unwrap();
        registry
            .register_announcement("personSensorAnnc", "perSrAnnc", NAMESPACE, "personSensor")
            .unwrap();

        // A module may not reuse a mirror's names either.
        let result = registry.register_module("personSensorAnnc", "fresh", NAMESPACE);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateDescriptor { .. })
        ));
        let result = registry.register_module("fresh", "perSrAnnc", NAMESPACE);
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateDescriptor { .. })
        ));
    }
}
