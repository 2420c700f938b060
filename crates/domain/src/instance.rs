//! Module instance — a live device-capability resource.
//!
//! Couples a shared [`Descriptor`] with the instance's own mutable state:
//! enum-coded data points and plain typed attributes. Instances are created
//! when a device capability materializes, updated on each sensor/actuator
//! event, and dropped with the owning device. The instance performs no
//! internal locking; a single owner mutates it.

use std::collections::BTreeMap;

use crate::attribute::AttributeValue;
use crate::datapoint::EnumDataPoint;
use crate::descriptor::Descriptor;
use crate::error::{NotFoundError, SdtHubError};
use crate::id::InstanceId;
use crate::time::{self, Timestamp};

/// A live instance of one capability, described by its descriptor.
#[derive(Debug, Clone)]
pub struct ModuleInstance {
    id: InstanceId,
    descriptor: Descriptor,
    datapoints: BTreeMap<String, EnumDataPoint>,
    attributes: BTreeMap<String, AttributeValue>,
    updated_at: Timestamp,
}

impl ModuleInstance {
    /// Create a builder for constructing a [`ModuleInstance`].
    #[must_use]
    pub fn builder(descriptor: Descriptor) -> ModuleInstanceBuilder {
        ModuleInstanceBuilder {
            id: None,
            descriptor,
            datapoints: BTreeMap::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Unique identifier of this instance.
    #[must_use]
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// The shared descriptor naming this capability.
    #[must_use]
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    /// When a data point or attribute was last successfully written.
    #[must_use]
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// Look up an owned data point by semantic name.
    #[must_use]
    pub fn datapoint(&self, name: &str) -> Option<&EnumDataPoint> {
        self.datapoints.get(name)
    }

    /// Look up a plain attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Iterate the owned data points in name order.
    pub fn datapoints(&self) -> impl Iterator<Item = &EnumDataPoint> {
        self.datapoints.values()
    }

    /// Write a new code to the named data point, returning the previous
    /// code. Validation is delegated to the data point: a rejected code
    /// changes nothing, including `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`SdtHubError::NotFound`] when no data point has `name`, and
    /// [`SdtHubError::Value`] when `code` is outside the data point's
    /// domain.
    pub fn assign(&mut self, name: &str, code: i32) -> Result<i32, SdtHubError> {
        let datapoint = self.datapoints.get_mut(name).ok_or_else(|| NotFoundError {
            entity: "DataPoint",
            name: name.to_string(),
        })?;
        let previous = datapoint.assign(code)?;
        self.updated_at = time::now();
        Ok(previous)
    }

    /// Store a plain attribute value, replacing any previous one.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: AttributeValue) {
        self.attributes.insert(name.into(), value);
        self.updated_at = time::now();
    }
}

/// Step-by-step builder for [`ModuleInstance`].
#[derive(Debug)]
pub struct ModuleInstanceBuilder {
    id: Option<InstanceId>,
    descriptor: Descriptor,
    datapoints: BTreeMap<String, EnumDataPoint>,
    attributes: BTreeMap<String, AttributeValue>,
}

impl ModuleInstanceBuilder {
    #[must_use]
    pub fn id(mut self, id: InstanceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Attach a data point; its semantic name becomes the lookup key.
    #[must_use]
    pub fn datapoint(mut self, datapoint: EnumDataPoint) -> Self {
        self.datapoints
            .insert(datapoint.name().to_string(), datapoint);
        self
    }

    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: AttributeValue) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Consume the builder and return a [`ModuleInstance`].
    #[must_use]
    pub fn build(self) -> ModuleInstance {
        ModuleInstance {
            id: self.id.unwrap_or_default(),
            descriptor: self.descriptor,
            datapoints: self.datapoints,
            attributes: self.attributes,
            updated_at: time::now(),
        }
    }
}
