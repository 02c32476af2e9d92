//! Field validators.
//!
//! Each field turns one line of user input into one validated value of the
//! template configuration, or into an [`InputError`] that the prompt state
//! machine reports before asking again.
//!
//! - `file_name`: output file name, with the program extension appended
//! - `node_count`: number of hosts in the generated network
//! - `host_names`: customization choice and per-host names
//! - `choice`: backend and topology keys checked against the registries

pub mod choice;
pub mod file_name;
pub mod host_names;
pub mod node_count;

pub use choice::ChoiceField;
pub use file_name::FileNameField;
pub use host_names::{collect_host_names, default_host_names, CustomizeField, HostNameField, DEFAULT_HOST_ALPHABET};
pub use node_count::{NodeCountField, DEFAULT_ADVISORY_CEILING, DEFAULT_NODES, MAX_NODES, MIN_NODES, PERFORMANCE_ADVISORY_NODES};

/// Rejected answers. Every variant is recovered by asking again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("That is an invalid template name: {reason}.")]
    InvalidFileName { reason: String },

    #[error("This template maker is currently limited to {limit} nodes ({requested} requested). If this does not meet your needs, please notify the project maintainers.")]
    CapacityExceeded { requested: usize, limit: usize },

    #[error("Please choose a unique host name. '{name}' already exists in your network.")]
    DuplicateName { name: String },

    #[error("Please enter a valid number for your choice of {kind} (1-{count}).")]
    RegistryKeyOutOfRange { kind: &'static str, key: usize, count: usize },
}

impl InputError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        InputError::InvalidInput {
            message: message.into(),
        }
    }
}
