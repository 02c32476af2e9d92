//! # Registry Module
//!
//! Registries map the small integer keys typed at the prompts to the
//! canonical identifiers written into the generated program.
//!
//! ## Registry Types
//!
//! **Backend Registry**:
//! - Fixed table of simulation backends (display name + import identifier)
//! - Reference table has four entries, but any non-empty table is accepted
//!
//! **Topology Registry**:
//! - Built by enumerating the runtime's topology names exactly once
//! - Keys are assigned in enumeration order starting at 1
//!
//! Both registries are immutable after construction and are passed by
//! reference to the prompt fields and the renderers.
//!
//! ## Key Ranges
//!
//! Keys are 1-based. Resolving key `0` or any key above the registry size
//! fails with [`RegistryError::OutOfRange`]; the prompt fields check the
//! range first, so resolution in the pipeline never sees an invalid key.

pub mod backend;
pub mod topology;

pub use backend::BackendRegistry;
pub use topology::TopologyRegistry;

use crate::config::Settings;

/// Registry lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{kind} key {key} is out of range (valid keys: 1-{count})")]
    OutOfRange {
        kind: &'static str,
        key: usize,
        count: usize,
    },
    #[error("{kind} registry cannot be empty")]
    Empty { kind: &'static str },
}

/// Check a 1-based key against a registry of `count` entries
pub(crate) fn check_key(kind: &'static str, key: usize, count: usize) -> Result<usize, RegistryError> {
    if key == 0 || key > count {
        return Err(RegistryError::OutOfRange { kind, key, count });
    }
    Ok(key - 1)
}

/// Both registries, built once at startup
#[derive(Debug, Clone)]
pub struct Registries {
    pub backends: BackendRegistry,
    pub topologies: TopologyRegistry,
}

impl Registries {
    /// Build both registries from validated settings
    pub fn from_settings(settings: &Settings) -> Result<Self, RegistryError> {
        let backends = BackendRegistry::new(settings.backends.clone())?;
        let topologies = TopologyRegistry::from_names(settings.topologies.iter().cloned())?;

        log::info!(
            "Registries ready: {} backend(s), {} topology name(s)",
            backends.len(),
            topologies.len()
        );

        Ok(Self {
            backends,
            topologies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_key_bounds() {
        assert_eq!(check_key("backend", 1, 4), Ok(0));
        assert_eq!(check_key("backend", 4, 4), Ok(3));
        assert_eq!(
            check_key("backend", 0, 4),
            Err(RegistryError::OutOfRange { kind: "backend", key: 0, count: 4 })
        );
        assert!(check_key("backend", 5, 4).is_err());
    }

    #[test]
    fn test_registries_from_default_settings() {
        let registries = Registries::from_settings(&Settings::default()).unwrap();
        assert_eq!(registries.backends.len(), 4);
        assert_eq!(registries.topologies.len(), 5);
    }

    #[test]
    fn test_out_of_range_message() {
        let err = RegistryError::OutOfRange { kind: "topology", key: 9, count: 5 };
        assert_eq!(err.to_string(), "topology key 9 is out of range (valid keys: 1-5)");
    }
}
