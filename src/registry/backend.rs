//! Backend registry.

use super::{check_key, RegistryError};
use crate::config::BackendDescriptor;
use crate::utils::python::keyed_dict;

/// Fixed table of simulation backends, keyed 1..=N
#[derive(Debug, Clone, PartialEq)]
pub struct BackendRegistry {
    entries: Vec<BackendDescriptor>,
}

impl BackendRegistry {
    pub fn new(entries: Vec<BackendDescriptor>) -> Result<Self, RegistryError> {
        if entries.is_empty() {
            return Err(RegistryError::Empty { kind: "backend" });
        }
        Ok(Self { entries })
    }

    /// Resolve a 1-based key to its backend descriptor
    pub fn resolve(&self, key: usize) -> Result<&BackendDescriptor, RegistryError> {
        let index = check_key("backend", key, self.entries.len())?;
        Ok(&self.entries[index])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, descriptor)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &BackendDescriptor)> {
        self.entries.iter().enumerate().map(|(i, entry)| (i + 1, entry))
    }

    /// Options as displayed at the prompt, e.g. `{1: 'EQSN', 2: 'CQC'}`
    pub fn options(&self) -> String {
        keyed_dict(self.iter().map(|(key, entry)| (key, entry.name.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::reference_backends;

    #[test]
    fn test_resolve_reference_backends() {
        let registry = BackendRegistry::new(reference_backends()).unwrap();

        assert_eq!(registry.resolve(1).unwrap().import, "EQSNBackend");
        assert_eq!(registry.resolve(2).unwrap().name, "CQC");
        assert_eq!(registry.resolve(4).unwrap().import, "ProjectQBackend");
    }

    #[test]
    fn test_resolve_out_of_range() {
        let registry = BackendRegistry::new(reference_backends()).unwrap();

        assert_eq!(
            registry.resolve(0),
            Err(RegistryError::OutOfRange { kind: "backend", key: 0, count: 4 })
        );
        assert!(registry.resolve(5).is_err());
    }

    #[test]
    fn test_pluggable_table() {
        let registry = BackendRegistry::new(vec![BackendDescriptor::new("Stim", "StimBackend")]).unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.options(), "{1: 'Stim'}");
        assert!(registry.resolve(2).is_err());
    }

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(
            BackendRegistry::new(Vec::new()),
            Err(RegistryError::Empty { kind: "backend" })
        );
    }

    #[test]
    fn test_options_listing() {
        let registry = BackendRegistry::new(reference_backends()).unwrap();
        assert_eq!(
            registry.options(),
            "{1: 'EQSN', 2: 'CQC', 3: 'QuTip', 4: 'ProjectQ'}"
        );
    }
}
