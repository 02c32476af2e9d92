//! # QNet Templater - Interactive generator for QuNetSim simulation programs
//!
//! This library collects a small configuration through a sequence of
//! validated prompts and renders a complete, runnable two-role QuNetSim
//! program from it.
//!
//! ## Overview
//!
//! A generation run asks, in order, for:
//!
//! 1. the template file name (default `template`, written as `template.py`)
//! 2. the number of hosts (default 3, 2 to 52)
//! 3. host names (default `A`, `B`, `C`, ... or custom alphanumeric names)
//! 4. the simulation backend (EQSN, CQC, QuTip, ProjectQ)
//! 5. the network topology (as enumerated by the runtime)
//!
//! The first host runs the sender protocol against the last host, which
//! runs the receiver protocol.
//!
//! ## Architecture
//!
//! - `config`: tool settings (registries, node-limit policy, defaults)
//! - `config_loader`: YAML settings loading
//! - `registry`: backend and topology registries
//! - `prompt`: prompter trait, console and per-field state machine
//! - `fields`: the field validators and the input error taxonomy
//! - `template`: the immutable template configuration record
//! - `render`: typed segments and the four segment renderers
//! - `assembler`: ordered concatenation and atomic write
//! - `orchestrator`: the end-to-end generation pipeline
//! - `utils`: name validation and Python literal helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use qnet_templater::config::Settings;
//! use qnet_templater::orchestrator;
//! use qnet_templater::prompt::Console;
//! use qnet_templater::registry::Registries;
//! use std::path::Path;
//!
//! let settings = Settings::default();
//! let registries = Registries::from_settings(&settings)?;
//! let mut console = Console::stdio();
//!
//! let path = orchestrator::run(&mut console, &settings, &registries, Path::new("."))?;
//! println!("Template written to {}", path.display());
//! # Ok::<(), color_eyre::eyre::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Rejected answers are never errors to the caller: they are reported and
//! the question is asked again. Only closed input, invalid settings and
//! filesystem failures surface as `color_eyre` errors.

pub mod assembler;
pub mod config;
pub mod config_loader;
pub mod fields;
pub mod orchestrator;
pub mod prompt;
pub mod registry;
pub mod render;
pub mod template;
pub mod utils;
