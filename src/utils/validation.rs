//! Name validation utilities.
//!
//! This module provides the pure checks behind the file-name and host-name
//! prompts. They return a human-readable reason on failure so the prompt
//! layer can show it verbatim.

use regex::Regex;
use std::sync::LazyLock;

/// Longest file name (in bytes) accepted on common filesystems
pub const MAX_FILE_NAME_BYTES: usize = 255;

/// Characters that are rejected anywhere in a file name
const RESERVED_CHARACTERS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Device names that cannot be used as file names on Windows
const RESERVED_DEVICE_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL",
    "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8", "COM9",
    "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Host names must be plain ASCII alphanumerics
static HOST_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("Invalid host name regex"));

/// ASCII Python identifiers, as emitted into generated import lines
static PYTHON_IDENTIFIER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid Python identifier regex")
});

/// Validate a candidate file name (without the program extension)
///
/// Checks for:
/// - Empty names and names longer than 255 bytes
/// - Path separators and other reserved characters
/// - ASCII control characters
/// - `.` / `..`, trailing spaces and trailing periods
/// - Windows reserved device names (`CON`, `COM1`, ...)
///
/// # Arguments
/// * `name` - The file name entered by the user
///
/// # Returns
/// * `Ok(())` if the name is usable as a file name
/// * `Err(String)` describing the first rule the name breaks
///
/// # Examples
/// ```
/// use qnet_templater::utils::validation::validate_file_name;
///
/// assert!(validate_file_name("teleport").is_ok());
/// assert!(validate_file_name("a/b").is_err());
/// assert!(validate_file_name("NUL").is_err());
/// ```
pub fn validate_file_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("the file name is empty".to_string());
    }

    if name.len() > MAX_FILE_NAME_BYTES {
        return Err(format!(
            "the file name is {} bytes long (maximum {})",
            name.len(),
            MAX_FILE_NAME_BYTES
        ));
    }

    if let Some(c) = name.chars().find(|c| RESERVED_CHARACTERS.contains(c)) {
        return Err(format!("the file name contains the reserved character '{}'", c));
    }

    if let Some(c) = name.chars().find(|c| c.is_ascii_control()) {
        return Err(format!(
            "the file name contains the control character U+{:04X}",
            c as u32
        ));
    }

    if name == "." || name == ".." {
        return Err(format!("'{}' is a reserved path component", name));
    }

    if name.ends_with(' ') || name.ends_with('.') {
        return Err("the file name must not end with a space or a period".to_string());
    }

    let stem = name.split('.').next().unwrap_or(name);
    if RESERVED_DEVICE_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
    {
        return Err(format!("'{}' is a reserved device name", stem));
    }

    Ok(())
}

/// Check whether a host name is a non-empty run of ASCII letters and digits
pub fn is_valid_host_name(name: &str) -> bool {
    HOST_NAME_PATTERN.is_match(name)
}

/// Check whether `name` is an ASCII Python identifier
///
/// # Examples
/// ```
/// use qnet_templater::utils::validation::is_python_identifier;
///
/// assert!(is_python_identifier("EQSNBackend"));
/// assert!(!is_python_identifier("Foo Bar; os.system('x')"));
/// ```
pub fn is_python_identifier(name: &str) -> bool {
    PYTHON_IDENTIFIER_PATTERN.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_file_name_accepts_plain_names() {
        assert!(validate_file_name("template").is_ok());
        assert!(validate_file_name("my_protocol-v2").is_ok());
        assert!(validate_file_name("bb84.test").is_ok());
        assert!(validate_file_name("console").is_ok());
    }

    #[test]
    fn test_validate_file_name_rejects_separators() {
        let err = validate_file_name("dir/name").unwrap_err();
        assert!(err.contains("'/'"));
        assert!(validate_file_name("dir\\name").is_err());
        assert!(validate_file_name("what?").is_err());
    }

    #[test]
    fn test_validate_file_name_rejects_reserved_forms() {
        assert!(validate_file_name("").is_err());
        assert!(validate_file_name(".").is_err());
        assert!(validate_file_name("..").is_err());
        assert!(validate_file_name("name.").is_err());
        assert!(validate_file_name("name ").is_err());
        assert!(validate_file_name("tab\there").is_err());
        assert!(validate_file_name("com3").is_err());
        assert!(validate_file_name("Aux.txt").is_err());
    }

    #[test]
    fn test_validate_file_name_length_limit() {
        assert!(validate_file_name(&"a".repeat(MAX_FILE_NAME_BYTES)).is_ok());
        assert!(validate_file_name(&"a".repeat(MAX_FILE_NAME_BYTES + 1)).is_err());
    }

    #[test]
    fn test_is_valid_host_name() {
        assert!(is_valid_host_name("Alice"));
        assert!(is_valid_host_name("node42"));
        assert!(is_valid_host_name("7"));
        assert!(!is_valid_host_name(""));
        assert!(!is_valid_host_name("Bob Smith"));
        assert!(!is_valid_host_name("host-1"));
        assert!(!is_valid_host_name(" Alice"));
        assert!(!is_valid_host_name("Ärger"));
    }

    #[test]
    fn test_is_python_identifier() {
        assert!(is_python_identifier("EQSNBackend"));
        assert!(is_python_identifier("_Private2"));
        assert!(!is_python_identifier(""));
        assert!(!is_python_identifier("2Backend"));
        assert!(!is_python_identifier("Foo Bar"));
        assert!(!is_python_identifier("os.system"));
        assert!(!is_python_identifier("Backend\nimport os"));
        assert!(!is_python_identifier("Bäckend"));
    }
}
