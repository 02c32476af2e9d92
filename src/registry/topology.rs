//! Topology registry.
//!
//! The simulation runtime owns the list of topologies it can generate; this
//! registry enumerates that list once and never hard-codes its size.

use super::{check_key, RegistryError};
use crate::utils::python::keyed_dict;

/// Topology names keyed 1..=N in enumeration order
#[derive(Debug, Clone, PartialEq)]
pub struct TopologyRegistry {
    names: Vec<String>,
}

impl TopologyRegistry {
    /// Enumerate a topology-name source, assigning keys from 1 in order
    pub fn from_names<I>(source: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = String>,
    {
        let names: Vec<String> = source.into_iter().collect();
        if names.is_empty() {
            return Err(RegistryError::Empty { kind: "topology" });
        }
        Ok(Self { names })
    }

    /// Resolve a 1-based key to its topology name
    pub fn resolve(&self, key: usize) -> Result<&str, RegistryError> {
        let index = check_key("topology", key, self.names.len())?;
        Ok(&self.names[index])
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(key, name)` pairs in key order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(i, name)| (i + 1, name.as_str()))
    }

    /// Options as displayed at the prompt, e.g. `{1: 'mesh', 2: 'star'}`
    pub fn options(&self) -> String {
        keyed_dict(self.iter())
    }
}
