//! Output file name prompt.

use super::InputError;
use crate::prompt::{Accepted, Field};
use crate::utils::validation::validate_file_name;

/// Asks for the template name and appends the program extension
#[derive(Debug, Clone)]
pub struct FileNameField<'a> {
    pub default_name: &'a str,
    pub extension: &'a str,
}

impl<'a> FileNameField<'a> {
    pub fn new(default_name: &'a str, extension: &'a str) -> Self {
        Self {
            default_name,
            extension,
        }
    }
}

impl Field for FileNameField<'_> {
    type Value = String;

    fn name(&self) -> &'static str {
        "template name"
    }

    fn prompt(&self) -> String {
        format!("Name for this template (default: {}): ", self.default_name)
    }

    fn validate(&self, input: &str) -> Result<Accepted<String>, InputError> {
        let stem = if input.is_empty() {
            self.default_name
        } else {
            validate_file_name(input).map_err(|reason| InputError::InvalidFileName { reason })?;
            input
        };
        Ok(Accepted::new(format!("{}.{}", stem, self.extension)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> FileNameField<'static> {
        FileNameField::new("template", "py")
    }

    #[test]
    fn test_empty_input_uses_default() {
        assert_eq!(field().validate("").unwrap().value, "template.py");
    }

    #[test]
    fn test_valid_name_gets_extension() {
        assert_eq!(field().validate("teleport").unwrap().value, "teleport.py");
        assert_eq!(field().validate("bb84.v2").unwrap().value, "bb84.v2.py");
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let err = field().validate("../escape").unwrap_err();
        assert!(matches!(err, InputError::InvalidFileName { .. }));
        assert!(err.to_string().starts_with("That is an invalid template name"));
        assert!(field().validate("a:b").is_err());
    }
}
