//! Generated home-domain catalog.
//!
//! Everything in this module is data, not logic: the closed value domains
//! of the home data types and the module-class table with its announcement
//! pairing. The generic mechanism lives in the sibling modules
//! ([`value_domain`](crate::value_domain), [`registry`](crate::registry));
//! this one just instantiates it for the home domain.

pub mod domains;
pub mod modules;

pub use modules::{HOME_NAMESPACE, HOME_PREFIX, register_home_modules};
