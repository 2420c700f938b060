//! Descriptors — immutable identity records for capability kinds.
//!
//! One [`ModuleDescriptor`] exists per capability kind (a "module class" in
//! oneM2M terms): a long human name, a short wire name, the qualifying
//! namespace, and the cached container-definition URI. Its
//! [`AnnouncementDescriptor`] twin represents the remote-announced form of
//! the same capability; its identity strings are its own, but its container
//! definition is borrowed from the peer, never derived from its own name.
//!
//! Descriptors are only constructed by the
//! [`ModuleRegistry`](crate::registry::ModuleRegistry), which is what
//! enforces global name uniqueness and container-definition derivation.

use std::sync::Arc;

use serde::Serialize;

/// Identity record for one capability kind.
///
/// Built once at registration, never mutated, shared read-only by every
/// instance of the capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    long_name: String,
    short_name: String,
    namespace: String,
    container_definition: String,
}

impl ModuleDescriptor {
    pub(crate) fn new(
        long_name: String,
        short_name: String,
        namespace: String,
        container_definition: String,
    ) -> Self {
        Self {
            long_name,
            short_name,
            namespace,
            container_definition,
        }
    }

    /// Human-readable name, e.g. `"atmosphericPressureSensor"`.
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Wire root-element name, e.g. `"atPSr"`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Qualifying namespace for the wire form.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Canonical container-definition URI,
    /// `"<prefix>.moduleclass.<longName>"`. Computed once at registration.
    #[must_use]
    pub fn container_definition(&self) -> &str {
        &self.container_definition
    }
}

/// The remote-announced form of a capability.
///
/// Carries its own identity strings but cross-references the peer
/// [`ModuleDescriptor`]: the container definition below is the peer's
/// cached value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementDescriptor {
    long_name: String,
    short_name: String,
    namespace: String,
    container_definition: String,
    peer_long_name: String,
}

impl AnnouncementDescriptor {
    pub(crate) fn new(
        long_name: String,
        short_name: String,
        namespace: String,
        container_definition: String,
        peer_long_name: String,
    ) -> Self {
        Self {
            long_name,
            short_name,
            namespace,
            container_definition,
            peer_long_name,
        }
    }

    /// Human-readable name, e.g. `"atmosphericPressureSensorAnnc"`.
    #[must_use]
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Wire root-element name, e.g. `"atPSrAnnc"`.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Qualifying namespace for the wire form.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The peer's container definition, borrowed at registration.
    #[must_use]
    pub fn container_definition(&self) -> &str {
        &self.container_definition
    }

    /// Long name of the base capability this announcement mirrors.
    #[must_use]
    pub fn peer_long_name(&self) -> &str {
        &self.peer_long_name
    }
}

/// Cheap-to-clone handle over either descriptor form, as stored and
/// returned by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Descriptor {
    Module(Arc<ModuleDescriptor>),
    Announcement(Arc<AnnouncementDescriptor>),
}

impl Descriptor {
    /// Human-readable name.
    #[must_use]
    pub fn long_name(&self) -> &str {
        match self {
            Self::Module(descriptor) => descriptor.long_name(),
            Self::Announcement(descriptor) => descriptor.long_name(),
        }
    }

    /// Wire root-element name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        match self {
            Self::Module(descriptor) => descriptor.short_name(),
            Self::Announcement(descriptor) => descriptor.short_name(),
        }
    }

    /// Qualifying namespace.
    #[must_use]
    pub fn namespace(&self) -> &str {
        match self {
            Self::Module(descriptor) => descriptor.namespace(),
            Self::Announcement(descriptor) => descriptor.namespace(),
        }
    }

    /// Container-definition URI (the peer's, for announcements).
    #[must_use]
    pub fn container_definition(&self) -> &str {
        match self {
            Self::Module(descriptor) => descriptor.container_definition(),
            Self::Announcement(descriptor) => descriptor.container_definition(),
        }
    }

    /// Whether this handle points at an announcement mirror.
    #[must_use]
    pub fn is_announcement(&self) -> bool {
        matches!(self, Self::Announcement(_))
    }
}
