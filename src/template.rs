//! Template configuration.
//!
//! [`TemplateConfig`] is the immutable record the prompts produce and the
//! renderers consume. It can only be obtained through
//! [`TemplateConfigBuilder::build`], which checks that every field is set
//! and consistent, so a renderer never sees a partial configuration.

use serde::Serialize;
use std::collections::HashSet;

use crate::fields::{MAX_NODES, MIN_NODES};
use crate::utils::validation::is_valid_host_name;

/// Fully validated answers for one generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateConfig {
    file_name: String,
    node_count: usize,
    host_names: Vec<String>,
    backend_key: usize,
    topology_key: usize,
}

impl TemplateConfig {
    pub fn builder() -> TemplateConfigBuilder {
        TemplateConfigBuilder::default()
    }

    /// Output file name, including the program extension
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Host names in role order
    pub fn host_names(&self) -> &[String] {
        &self.host_names
    }

    pub fn backend_key(&self) -> usize {
        self.backend_key
    }

    pub fn topology_key(&self) -> usize {
        self.topology_key
    }

    /// Host running the sender protocol (first host)
    pub fn sender_host(&self) -> &str {
        &self.host_names[0]
    }

    /// Host running the receiver protocol (last host)
    pub fn receiver_host(&self) -> &str {
        &self.host_names[self.host_names.len() - 1]
    }
}

/// Errors raised when assembling a template configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template configuration is missing the {0}")]
    MissingField(&'static str),
    #[error("expected {expected} host names, got {actual}")]
    HostCountMismatch { expected: usize, actual: usize },
    #[error("node count {0} is below the minimum of {min}", min = MIN_NODES)]
    TooFewNodes(usize),
    #[error("host name '{0}' is not alphanumeric")]
    InvalidHostName(String),
    #[error("host name '{0}' is used more than once")]
    DuplicateHostName(String),
    #[error("registry keys are 1-based, got 0 for the {0}")]
    ZeroKey(&'static str),
}

/// Incremental builder filled in field by field
#[derive(Debug, Default, Clone)]
pub struct TemplateConfigBuilder {
    file_name: Option<String>,
    node_count: Option<usize>,
    host_names: Option<Vec<String>>,
    backend_key: Option<usize>,
    topology_key: Option<usize>,
}

impl TemplateConfigBuilder {
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn node_count(mut self, node_count: usize) -> Self {
        self.node_count = Some(node_count);
        self
    }

    pub fn host_names(mut self, host_names: Vec<String>) -> Self {
        self.host_names = Some(host_names);
        self
    }

    pub fn backend_key(mut self, key: usize) -> Self {
        self.backend_key = Some(key);
        self
    }

    pub fn topology_key(mut self, key: usize) -> Self {
        self.topology_key = Some(key);
        self
    }

    /// Check the collected fields and freeze them
    ///
    /// The node count ceiling is not enforced here: under the advisory
    /// node-limit policy counts above it are legitimate.
    pub fn build(self) -> Result<TemplateConfig, TemplateError> {
        let file_name = self.file_name.ok_or(TemplateError::MissingField("file name"))?;
        let node_count = self.node_count.ok_or(TemplateError::MissingField("node count"))?;
        let host_names = self.host_names.ok_or(TemplateError::MissingField("host names"))?;
        let backend_key = self.backend_key.ok_or(TemplateError::MissingField("backend key"))?;
        let topology_key = self.topology_key.ok_or(TemplateError::MissingField("topology key"))?;

        if node_count < MIN_NODES {
            return Err(TemplateError::TooFewNodes(node_count));
        }
        if host_names.len() != node_count {
            return Err(TemplateError::HostCountMismatch {
                expected: node_count,
                actual: host_names.len(),
            });
        }

        let mut seen = HashSet::new();
        for name in &host_names {
            if !is_valid_host_name(name) {
                return Err(TemplateError::InvalidHostName(name.clone()));
            }
            if !seen.insert(name.as_str()) {
                return Err(TemplateError::DuplicateHostName(name.clone()));
            }
        }

        if backend_key == 0 {
            return Err(TemplateError::ZeroKey("backend key"));
        }
        if topology_key == 0 {
            return Err(TemplateError::ZeroKey("topology key"));
        }

        if node_count > MAX_NODES {
            log::warn!("Template configuration exceeds {} nodes ({})", MAX_NODES, node_count);
        }

        Ok(TemplateConfig {
            file_name,
            node_count,
            host_names,
            backend_key,
            topology_key,
        })
    }
}
