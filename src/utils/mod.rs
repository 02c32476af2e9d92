//! Shared utilities: name validation and Python literal rendering.

pub mod python;
pub mod validation;

pub use validation::{is_python_identifier, is_valid_host_name, validate_file_name};
