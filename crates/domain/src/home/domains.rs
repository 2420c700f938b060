//! Value domains of the home data types.
//!
//! Each constructor returns a freshly validated domain; bootstrap code
//! builds them once and shares the `Arc` with every data point and schema
//! that needs them.

use std::sync::Arc;

use crate::error::ValueError;
use crate::value_domain::ValueDomain;

/// Strength of a taste, e.g. coffee brewing strength.
///
/// # Errors
///
/// Construction of a catalog domain only fails if its definition table is
/// inconsistent; the same applies to every constructor below.
pub fn taste_strength() -> Result<Arc<ValueDomain>, ValueError> {
    define(
        "tasteStrength",
        &[
            ("zero", 1),
            ("sensitive", 2),
            ("medium", 3),
            ("strong", 4),
            ("maximum", 5),
        ],
    )
}

/// Strength of milk foam.
pub fn foam_strength() -> Result<Arc<ValueDomain>, ValueError> {
    define(
        "foamStrength",
        &[
            ("zero", 1),
            ("sensitive", 2),
            ("medium", 3),
            ("strong", 4),
            ("maximum", 5),
        ],
    )
}

/// Fill level of a liquid tank.
pub fn liquid_level() -> Result<Arc<ValueDomain>, ValueError> {
    define(
        "liquidLevel",
        &[
            ("zero", 1),
            ("low", 2),
            ("medium", 3),
            ("high", 4),
            ("maximum", 5),
        ],
    )
}

/// Position of a door.
pub fn door_state() -> Result<Arc<ValueDomain>, ValueError> {
    define(
        "doorState",
        &[
            ("closed", 1),
            ("open", 2),
            ("opening", 3),
            ("closing", 4),
            ("stuck", 5),
        ],
    )
}

/// State of a lock actuator.
pub fn lock_state() -> Result<Arc<ValueDomain>, ValueError> {
    define("lockState", &[("locked", 1), ("unlocked", 2)])
}

fn define(name: &str, pairs: &[(&str, i32)]) -> Result<Arc<ValueDomain>, ValueError> {
    Ok(Arc::new(ValueDomain::define(name, pairs.iter().copied())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_every_catalog_domain() {
        for domain in [
            taste_strength().unwrap(),
            foam_strength().unwrap(),
            liquid_level().unwrap(),
            door_state().unwrap(),
            lock_state().unwrap(),
        ] {
            assert!(!domain.is_empty());
            assert_eq!(domain.first_code(), 1);
        }
    }

    #[test]
    fn should_match_published_taste_strength_codes() {
        let domain = taste_strength().unwrap();
        assert_eq!(domain.code_of("zero"), Some(1));
        assert_eq!(domain.code_of("sensitive"), Some(2));
        assert_eq!(domain.code_of("medium"), Some(3));
        assert_eq!(domain.code_of("strong"), Some(4));
        assert_eq!(domain.code_of("maximum"), Some(5));
        assert!(!domain.contains(6));
    }
}
