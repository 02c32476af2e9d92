//! Interactive prompt plumbing.
//!
//! This module contains the I/O seam used by every prompt ([`Prompter`]),
//! its console implementation, and the state machine that drives a single
//! field from prompt to accepted value.

pub mod console;
pub mod machine;

pub use console::{AcceptDefaults, Console, Prompter};
pub use machine::{run_field, Accepted, Field, FieldState, PromptError, DIAGNOSTIC_PREFIX};
