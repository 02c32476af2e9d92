//! Field state machine.
//!
//! Every prompt follows the same cycle:
//!
//! ```text
//! Prompting --line--> Validating --ok--> Accepted
//!     ^                   |
//!     +---- Rejected <----+ err
//! ```
//!
//! There is no retry limit. The loop ends on a valid answer or when the
//! input runs dry, which is reported as [`PromptError::InputClosed`].

use std::io;

use log::debug;

use super::console::Prompter;
use crate::fields::InputError;

/// Prefix of every diagnostic printed after a rejected answer
pub const DIAGNOSTIC_PREFIX: &str = "----";

/// Failures that end a prompt sequence
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("input closed while waiting for the {field}")]
    InputClosed { field: &'static str },
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// A value that passed validation, with an optional non-blocking notice
#[derive(Debug, Clone, PartialEq)]
pub struct Accepted<T> {
    pub value: T,
    pub notice: Option<String>,
}

impl<T> Accepted<T> {
    pub fn new(value: T) -> Self {
        Self { value, notice: None }
    }

    pub fn with_notice(value: T, notice: impl Into<String>) -> Self {
        Self {
            value,
            notice: Some(notice.into()),
        }
    }
}

/// One validated configuration field
pub trait Field {
    type Value;

    /// Short name used in logs and errors (e.g., "node count")
    fn name(&self) -> &'static str;

    /// Context shown before every prompt, such as the available options
    fn context(&self) -> Option<String> {
        None
    }

    /// Question text, including the default
    fn prompt(&self) -> String;

    /// Parse and check one answer
    fn validate(&self, input: &str) -> Result<Accepted<Self::Value>, InputError>;
}

/// States of a single field
#[derive(Debug, PartialEq)]
pub enum FieldState<T> {
    Prompting,
    Validating(String),
    Accepted(T),
    Rejected(InputError),
}

impl<T> FieldState<T> {
    /// Advance one step, reading from or writing to `prompter` as needed
    pub fn step<F, P>(self, field: &F, prompter: &mut P) -> Result<Self, PromptError>
    where
        F: Field<Value = T>,
        P: Prompter + ?Sized,
    {
        let next = match self {
            FieldState::Prompting => {
                if let Some(context) = field.context() {
                    prompter.say(&context)?;
                }
                match prompter.ask(&field.prompt())? {
                    Some(line) => FieldState::Validating(line),
                    None => return Err(PromptError::InputClosed { field: field.name() }),
                }
            }
            FieldState::Validating(input) => match field.validate(&input) {
                Ok(accepted) => {
                    if let Some(notice) = accepted.notice {
                        prompter.say(&format!("{}{}", DIAGNOSTIC_PREFIX, notice))?;
                    }
                    FieldState::Accepted(accepted.value)
                }
                Err(err) => FieldState::Rejected(err),
            },
            FieldState::Rejected(err) => {
                debug!("Rejected {} answer: {:?}", field.name(), err);
                prompter.say(&format!("{}{}", DIAGNOSTIC_PREFIX, err))?;
                FieldState::Prompting
            }
            accepted @ FieldState::Accepted(_) => accepted,
        };
        Ok(next)
    }
}

/// Drive `field` until it accepts an answer
pub fn run_field<F, P>(prompter: &mut P, field: &F) -> Result<F::Value, PromptError>
where
    F: Field,
    P: Prompter + ?Sized,
{
    let mut state = FieldState::Prompting;
    loop {
        state = match state.step(field, prompter)? {
            FieldState::Accepted(value) => {
                debug!("Accepted {} answer", field.name());
                return Ok(value);
            }
            other => other,
        };
    }
}
