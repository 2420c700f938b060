//! # sdthub-domain
//!
//! Pure domain model for the sdthub semantic device broker.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Value Domains** (closed, ordered sets of integer-coded values)
//! - Define **Data Points** (validated, integer-coded readings on a value domain)
//! - Define **Descriptors** (immutable identity records for capability kinds)
//!   and their **Announcement** mirrors (the remote-advertised form)
//! - Define the **Module Registry** (explicit, process-scoped descriptor store)
//! - Define **Module Instances** (live device-capability resources)
//! - Ship the generated **home-domain catalog** (module table + value domains)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from adapters or external IO crates.
//! The wire binding lives in `sdthub-codec` and consumes this crate.

pub mod error;
pub mod id;
pub mod time;

pub mod attribute;
pub mod datapoint;
pub mod descriptor;
pub mod home;
pub mod instance;
pub mod registry;
pub mod value_domain;
