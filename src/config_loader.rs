use crate::config::Settings;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::{info, warn};
use std::fs::File;
use std::path::Path;

/// Load and parse settings from a YAML file
pub fn load_settings(settings_path: &Path) -> Result<Settings> {
    info!("Loading settings from: {:?}", settings_path);

    let file = File::open(settings_path)
        .wrap_err_with(|| format!("Failed to open settings file '{}'", settings_path.display()))?;

    let settings: Settings = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse settings file '{}'", settings_path.display()))?;

    settings.validate()?;

    info!(
        "Settings provide {} backend(s) and {} topology name(s)",
        settings.backends.len(),
        settings.topologies.len()
    );

    Ok(settings)
}

/// Warn when a settings file replaces the registries the runtime ships with
pub fn check_settings_compatibility(settings: &Settings) {
    let defaults = Settings::default();

    if settings.backends != defaults.backends {
        warn!(
            "Settings replace the reference backend table; generated programs will import {:?}",
            settings.backends.iter().map(|b| b.import.as_str()).collect::<Vec<_>>()
        );
    }

    if settings.topologies != defaults.topologies {
        warn!(
            "Settings replace the runtime topology list; make sure the runtime supports {:?}",
            settings.topologies
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NodeLimitPolicy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_settings() {
        let yaml = r#"
node_limit: advisory
default_file_name: "teleport"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let settings = load_settings(temp_file.path()).unwrap();
        assert_eq!(settings.node_limit, NodeLimitPolicy::Advisory);
        assert_eq!(settings.default_program_file(), "teleport.py");
    }

    #[test]
    fn test_load_invalid_settings() {
        let yaml = r#"
topologies: []
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        assert!(load_settings(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_settings(&dir.path().join("missing.yaml")).is_err());
    }
}
