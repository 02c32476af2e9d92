//! Registry key prompts (backend and topology).

use super::InputError;
use crate::prompt::{Accepted, Field};
use crate::registry::{BackendRegistry, TopologyRegistry};

/// Key used when the user accepts the default
pub const DEFAULT_KEY: usize = 1;

/// Asks for a 1-based key into a registry of `count` entries
#[derive(Debug, Clone)]
pub struct ChoiceField {
    kind: &'static str,
    options: String,
    count: usize,
}

impl ChoiceField {
    pub fn new(kind: &'static str, options: String, count: usize) -> Self {
        Self {
            kind,
            options,
            count,
        }
    }

    pub fn backend(registry: &BackendRegistry) -> Self {
        Self::new("backend", registry.options(), registry.len())
    }

    pub fn topology(registry: &TopologyRegistry) -> Self {
        Self::new("topology", registry.options(), registry.len())
    }
}

impl Field for ChoiceField {
    type Value = usize;

    fn name(&self) -> &'static str {
        self.kind
    }

    fn context(&self) -> Option<String> {
        Some(format!("Your {} options are {}", self.kind, self.options))
    }

    fn prompt(&self) -> String {
        format!(
            "Please enter the number of your desired {} (Default: {}): ",
            self.kind, DEFAULT_KEY
        )
    }

    fn validate(&self, input: &str) -> Result<Accepted<usize>, InputError> {
        if input.is_empty() {
            return Ok(Accepted::new(DEFAULT_KEY));
        }

        let key: usize = input.trim().parse().map_err(|_| {
            InputError::invalid(format!(
                "Please enter a valid number for your choice of {}.",
                self.kind
            ))
        })?;

        if key == 0 || key > self.count {
            return Err(InputError::RegistryKeyOutOfRange {
                kind: self.kind,
                key,
                count: self.count,
            });
        }

        Ok(Accepted::new(key))
    }
}
