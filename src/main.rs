use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::io;
use std::path::{Path, PathBuf};

use qnet_templater::config::{NodeLimitPolicy, Settings};
use qnet_templater::config_loader::{check_settings_compatibility, load_settings};
use qnet_templater::orchestrator::{collect_template_config, generate_program, run};
use qnet_templater::prompt::{AcceptDefaults, Console, Prompter};
use qnet_templater::registry::Registries;

/// Interactive template generator for two-role QuNetSim network simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a YAML settings file (backends, topologies, defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the generated program is written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// How node counts above 52 are treated (overrides the settings file)
    #[arg(long, value_enum)]
    node_limit: Option<NodeLimitPolicy>,

    /// Accept every default without prompting
    #[arg(long)]
    defaults: bool,

    /// Print the generated program to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the backend and topology options and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    // Prompts own stdout, so only warnings are logged unless RUST_LOG says otherwise
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    info!("Starting QNet Templater");

    let mut settings = match &args.config {
        Some(path) => {
            let settings = load_settings(path)?;
            check_settings_compatibility(&settings);
            settings
        }
        None => Settings::default(),
    };
    if let Some(policy) = args.node_limit {
        info!("Node limit policy overridden to {:?}", policy);
        settings.node_limit = policy;
    }

    let registries = Registries::from_settings(&settings)?;

    if args.list {
        println!("Backends: {}", registries.backends.options());
        println!("Topologies: {}", registries.topologies.options());
        return Ok(());
    }

    // With --stdout the program owns stdout, so prompts move to stderr
    let mut prompter: Box<dyn Prompter> = match (args.defaults, args.stdout) {
        (true, false) => Box::new(AcceptDefaults::new(io::stdout())),
        (true, true) => Box::new(AcceptDefaults::new(io::stderr())),
        (false, false) => Box::new(Console::stdio()),
        (false, true) => Box::new(Console::stdio_stderr()),
    };

    if let Some(path) = generate(prompter.as_mut(), &settings, &registries, args.stdout, &args.output_dir)? {
        println!("Template written to {}", path.display());
    }

    info!("Generation completed successfully");
    Ok(())
}

/// Generate one program, either onto stdout or into `output_dir`
///
/// Returns the written path, or `None` when the program went to stdout.
fn generate(
    prompter: &mut dyn Prompter,
    settings: &Settings,
    registries: &Registries,
    to_stdout: bool,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    if to_stdout {
        let config = collect_template_config(prompter, settings, registries)?;
        let program = generate_program(&config, registries)?;
        print!("{}", program.render());
        return Ok(None);
    }

    run(prompter, settings, registries, output_dir).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let args = Args::parse_from(["qnet-templater"]);

        assert_eq!(args.config, None);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert_eq!(args.node_limit, None);
        assert!(!args.defaults);
        assert!(!args.stdout);
        assert!(!args.list);
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from([
            "qnet-templater",
            "--config", "settings.yaml",
            "--output-dir", "generated",
            "--node-limit", "advisory",
            "--defaults",
        ]);

        assert_eq!(args.config, Some(PathBuf::from("settings.yaml")));
        assert_eq!(args.output_dir, PathBuf::from("generated"));
        assert_eq!(args.node_limit, Some(NodeLimitPolicy::Advisory));
        assert!(args.defaults);
    }

    #[test]
    fn test_generate_writes_through_orchestrator() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default();
        let registries = Registries::from_settings(&settings).unwrap();
        let mut prompter = AcceptDefaults::new(Vec::new());

        let path = generate(&mut prompter, &settings, &registries, false, dir.path())
            .unwrap()
            .unwrap();

        assert_eq!(path, dir.path().join("template.py"));
        assert!(std::fs::read_to_string(&path).unwrap().contains("def main():"));
    }

    #[test]
    fn test_generate_to_stdout_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default();
        let registries = Registries::from_settings(&settings).unwrap();
        let mut prompter = AcceptDefaults::new(Vec::new());

        let path = generate(&mut prompter, &settings, &registries, true, dir.path()).unwrap();

        assert_eq!(path, None);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_generate_reports_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let settings = Settings::default();
        let registries = Registries::from_settings(&settings).unwrap();
        let mut prompter = AcceptDefaults::new(Vec::new());

        let err = generate(&mut prompter, &settings, &registries, false, &missing).unwrap_err();
        assert!(err.to_string().contains("Failed to write template"));
    }

    #[test]
    fn test_cli_rejects_unknown_policy() {
        assert!(Args::try_parse_from(["qnet-templater", "--node-limit", "loose"]).is_err());
    }
}
