//! Generation orchestrator.
//!
//! This module coordinates a full generation run: the prompt sequence that
//! yields a [`TemplateConfig`], registry resolution, segment rendering and
//! assembly into the final program.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use std::path::{Path, PathBuf};

use crate::assembler::{assemble, GeneratedProgram};
use crate::config::Settings;
use crate::fields::{collect_host_names, ChoiceField, FileNameField, NodeCountField};
use crate::prompt::{run_field, Prompter};
use crate::registry::{Registries, RegistryError};
use crate::render::{render_entry_point, render_imports, render_orchestration, render_protocols};
use crate::template::TemplateConfig;

/// Ask every question in order and freeze the answers
///
/// Order: file name, node count, host names, backend, topology.
pub fn collect_template_config<P>(
    prompter: &mut P,
    settings: &Settings,
    registries: &Registries,
) -> Result<TemplateConfig>
where
    P: Prompter + ?Sized,
{
    let file_name = run_field(
        prompter,
        &FileNameField::new(&settings.default_file_name, &settings.program_extension),
    )?;
    info!("Template file: {}", file_name);

    let node_field = NodeCountField::new(settings.node_limit)
        .with_advisory_ceiling(settings.max_advisory_nodes);
    let node_count = run_field(prompter, &node_field)?;
    info!("Node count: {}", node_count);

    let host_names = collect_host_names(prompter, node_count)?;
    info!("Host names: {:?}", host_names);

    let backend_key = run_field(prompter, &ChoiceField::backend(&registries.backends))?;
    info!("Backend key: {}", backend_key);

    let topology_key = run_field(prompter, &ChoiceField::topology(&registries.topologies))?;
    info!("Topology key: {}", topology_key);

    let config = TemplateConfig::builder()
        .file_name(file_name)
        .node_count(node_count)
        .host_names(host_names)
        .backend_key(backend_key)
        .topology_key(topology_key)
        .build()?;

    Ok(config)
}

/// Resolve registry keys and render all segments into one program
pub fn generate_program(
    config: &TemplateConfig,
    registries: &Registries,
) -> std::result::Result<GeneratedProgram, RegistryError> {
    let backend = registries.backends.resolve(config.backend_key())?;
    let topology = registries.topologies.resolve(config.topology_key())?;

    info!(
        "Rendering program with backend {} and topology '{}'",
        backend.name, topology
    );

    Ok(assemble(
        render_imports(backend),
        render_protocols(),
        render_orchestration(topology, config),
        render_entry_point(),
    ))
}

/// Run a complete generation and write the program into `output_dir`
///
/// Returns the path of the written program.
pub fn run<P>(
    prompter: &mut P,
    settings: &Settings,
    registries: &Registries,
    output_dir: &Path,
) -> Result<PathBuf>
where
    P: Prompter + ?Sized,
{
    let config = collect_template_config(prompter, settings, registries)?;
    log::debug!(
        "Collected template configuration:\n{}",
        serde_yaml::to_string(&config).wrap_err("Failed to serialize template configuration")?
    );

    let program = generate_program(&config, registries)?;

    let path = output_dir.join(config.file_name());
    program
        .persist(&path)
        .wrap_err_with(|| format!("Failed to write template '{}'", path.display()))?;

    Ok(path)
}
