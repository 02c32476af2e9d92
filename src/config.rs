use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::fields::{DEFAULT_ADVISORY_CEILING, MAX_NODES};
use crate::utils::validation::{is_python_identifier, validate_file_name};

/// How the node-count prompt treats counts above the supported ceiling
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NodeLimitPolicy {
    /// Counts above the ceiling are rejected and the user is asked again
    #[default]
    Strict,
    /// Counts above the ceiling are accepted with a warning
    Advisory,
}

/// A simulation backend the generated program can instantiate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    /// Name shown to the user (e.g., "EQSN")
    pub name: String,
    /// Class imported from `qunetsim.backends` (e.g., "EQSNBackend")
    pub import: String,
}

impl BackendDescriptor {
    pub fn new(name: &str, import: &str) -> Self {
        Self {
            name: name.to_string(),
            import: import.to_string(),
        }
    }
}

/// Tool settings, loadable from a YAML file
///
/// Every field is optional in the file; missing fields fall back to the
/// reference registries and defaults.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Backend table, keyed 1..=N in list order
    pub backends: Vec<BackendDescriptor>,
    /// Topology names as enumerated by the simulation runtime, keyed 1..=N
    pub topologies: Vec<String>,
    /// Behavior of the node-count prompt above the supported ceiling
    pub node_limit: NodeLimitPolicy,
    /// Largest node count accepted under the advisory policy
    pub max_advisory_nodes: usize,
    /// File name used when the user accepts the default
    pub default_file_name: String,
    /// Extension appended to the validated file name
    pub program_extension: String,
}

impl Settings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.backends.is_empty() {
            return Err(SettingsError::InvalidBackends(
                "at least one backend is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for backend in &self.backends {
            if backend.name.trim().is_empty() || backend.import.trim().is_empty() {
                return Err(SettingsError::InvalidBackends(
                    "backend name and import cannot be empty".to_string(),
                ));
            }
            if backend.name.chars().any(char::is_control) {
                return Err(SettingsError::InvalidBackends(format!(
                    "backend name {:?} contains a control character",
                    backend.name
                )));
            }
            if !is_python_identifier(&backend.import) {
                return Err(SettingsError::InvalidBackends(format!(
                    "backend import {:?} is not a Python identifier",
                    backend.import
                )));
            }
            if !seen.insert(backend.name.as_str()) {
                return Err(SettingsError::InvalidBackends(format!(
                    "backend '{}' is listed more than once",
                    backend.name
                )));
            }
        }

        if self.topologies.is_empty() {
            return Err(SettingsError::InvalidTopologies(
                "at least one topology is required".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for topology in &self.topologies {
            if topology.trim().is_empty() {
                return Err(SettingsError::InvalidTopologies(
                    "topology names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(topology.as_str()) {
                return Err(SettingsError::InvalidTopologies(format!(
                    "topology '{}' is listed more than once",
                    topology
                )));
            }
        }

        if self.max_advisory_nodes < MAX_NODES {
            return Err(SettingsError::InvalidNodeLimit(format!(
                "max_advisory_nodes must be at least {}, got {}",
                MAX_NODES, self.max_advisory_nodes
            )));
        }

        validate_file_name(&self.default_file_name)
            .map_err(|reason| SettingsError::InvalidOutput(format!("default_file_name: {}", reason)))?;

        if self.program_extension.is_empty()
            || self.program_extension.starts_with('.')
            || validate_file_name(&self.program_extension).is_err()
        {
            return Err(SettingsError::InvalidOutput(format!(
                "program_extension '{}' is not a valid extension",
                self.program_extension
            )));
        }

        Ok(())
    }

    /// Default file name with the program extension appended
    pub fn default_program_file(&self) -> String {
        format!("{}.{}", self.default_file_name, self.program_extension)
    }
}

/// Settings validation errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Invalid backend settings: {0}")]
    InvalidBackends(String),
    #[error("Invalid topology settings: {0}")]
    InvalidTopologies(String),
    #[error("Invalid node limit settings: {0}")]
    InvalidNodeLimit(String),
    #[error("Invalid output settings: {0}")]
    InvalidOutput(String),
}

/// Backends shipped with the simulation runtime
pub fn reference_backends() -> Vec<BackendDescriptor> {
    vec![
        BackendDescriptor::new("EQSN", "EQSNBackend"),
        BackendDescriptor::new("CQC", "CQCBackend"),
        BackendDescriptor::new("QuTip", "QuTipBackend"),
        BackendDescriptor::new("ProjectQ", "ProjectQBackend"),
    ]
}

/// Topologies enumerated by the simulation runtime's `Network.topologies`
pub fn runtime_topologies() -> Vec<String> {
    ["mesh", "star", "ring", "linear", "tree"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

/// Default implementation for Settings
impl Default for Settings {
    fn default() -> Self {
        Self {
            backends: reference_backends(),
            topologies: runtime_topologies(),
            node_limit: NodeLimitPolicy::Strict,
            max_advisory_nodes: DEFAULT_ADVISORY_CEILING,
            default_file_name: "template".to_string(),
            program_extension: "py".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.backends.len(), 4);
        assert_eq!(settings.backends[0], BackendDescriptor::new("EQSN", "EQSNBackend"));
        assert_eq!(settings.topologies[0], "mesh");
        assert_eq!(settings.default_program_file(), "template.py");
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
node_limit: advisory
topologies: ["ring", "star"]
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.node_limit, NodeLimitPolicy::Advisory);
        assert_eq!(settings.topologies, vec!["ring".to_string(), "star".to_string()]);
        assert_eq!(settings.backends, reference_backends());
        assert_eq!(settings.program_extension, "py");
    }

    #[test]
    fn test_custom_backends_parse() {
        let yaml = r#"
backends:
  - name: "EQSN"
    import: "EQSNBackend"
  - name: "Stim"
    import: "StimBackend"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.backends[1].import, "StimBackend");
    }

    #[test]
    fn test_validation_errors() {
        let mut settings = Settings::default();
        settings.backends.clear();
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidBackends(_))));

        let mut settings = Settings::default();
        settings.topologies.push("mesh".to_string());
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidTopologies(_))));

        let mut settings = Settings::default();
        settings.topologies = vec![" ".to_string()];
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.default_file_name = "out/template".to_string();
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidOutput(_))));

        let mut settings = Settings::default();
        settings.program_extension = ".py".to_string();
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.max_advisory_nodes = MAX_NODES - 1;
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidNodeLimit(_))));
    }

    #[test]
    fn test_backend_descriptors_must_render_as_python() {
        let mut settings = Settings::default();
        settings.backends = vec![BackendDescriptor::new("Evil\nimport os", "Foo Bar; os.system('x')")];
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, SettingsError::InvalidBackends(_)));
        assert!(err.to_string().contains("control character"));

        let mut settings = Settings::default();
        settings.backends = vec![BackendDescriptor::new("Evil", "Foo Bar; os.system('x')")];
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("not a Python identifier"));

        let mut settings = Settings::default();
        settings.backends.push(BackendDescriptor::new("Tab\tName", "TabBackend"));
        assert!(settings.validate().is_err());

        let yaml = r#"
backends:
  - name: "Stim"
    import: "stim.Backend"
"#;
        let settings: Settings = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(settings.validate(), Err(SettingsError::InvalidBackends(_))));
    }

    #[test]
    fn test_max_advisory_nodes_from_yaml() {
        let settings: Settings = serde_yaml::from_str("max_advisory_nodes: 200\n").unwrap();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.max_advisory_nodes, 200);
        assert_eq!(Settings::default().max_advisory_nodes, DEFAULT_ADVISORY_CEILING);
    }
}
