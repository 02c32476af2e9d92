//! Host name prompts.
//!
//! Host names are either taken from a fixed alphabet (`A`..`Z` then
//! `a`..`z`) or entered one by one. The order of the returned names is the
//! role order: the first host runs the sender protocol and the last host
//! runs the receiver protocol.

use log::{info, warn};

use super::InputError;
use crate::prompt::{run_field, Accepted, Field, PromptError, Prompter, DIAGNOSTIC_PREFIX};
use crate::utils::validation::is_valid_host_name;

/// Default host names, in assignment order
pub const DEFAULT_HOST_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Default name of the host at `index`, if the alphabet is long enough
fn default_name(index: usize) -> Option<&'static str> {
    DEFAULT_HOST_ALPHABET.get(index..index + 1)
}

/// The first `count` symbols of the default alphabet
pub fn default_host_names(count: usize) -> Result<Vec<String>, InputError> {
    let limit = DEFAULT_HOST_ALPHABET.len();
    if count > limit {
        return Err(InputError::CapacityExceeded {
            requested: count,
            limit,
        });
    }
    Ok(DEFAULT_HOST_ALPHABET[..count]
        .chars()
        .map(|c| c.to_string())
        .collect())
}

/// Asks whether the user wants to name the hosts; any answer means yes
#[derive(Debug, Clone, Copy)]
pub struct CustomizeField;

impl Field for CustomizeField {
    type Value = bool;

    fn name(&self) -> &'static str {
        "host name customization choice"
    }

    fn prompt(&self) -> String {
        "If you would like to customize your host names, please enter any character before pressing enter... "
            .to_string()
    }

    fn validate(&self, input: &str) -> Result<Accepted<bool>, InputError> {
        Ok(Accepted::new(!input.is_empty()))
    }
}

/// Asks for the name of one host
#[derive(Debug, Clone)]
pub struct HostNameField<'a> {
    /// Zero-based role position
    pub index: usize,
    /// Names already chosen for earlier hosts in this run
    pub taken: &'a [String],
}

impl<'a> HostNameField<'a> {
    pub fn new(index: usize, taken: &'a [String]) -> Self {
        Self { index, taken }
    }
}

impl Field for HostNameField<'_> {
    type Value = String;

    fn name(&self) -> &'static str {
        "host name"
    }

    fn prompt(&self) -> String {
        match default_name(self.index) {
            Some(default) => format!(
                "Please choose a name for host {} (Default: {}) : ",
                self.index + 1,
                default
            ),
            None => format!("Please choose a name for host {} : ", self.index + 1),
        }
    }

    fn validate(&self, input: &str) -> Result<Accepted<String>, InputError> {
        let candidate = if input.is_empty() {
            default_name(self.index).ok_or_else(|| {
                InputError::invalid(format!(
                    "Host {} has no default name. Please enter one.",
                    self.index + 1
                ))
            })?
        } else if is_valid_host_name(input) {
            input
        } else {
            return Err(InputError::invalid(
                "Please enter a valid host name. Host names must consist entirely of alphanumeric values.",
            ));
        };

        if self.taken.iter().any(|name| name == candidate) {
            return Err(InputError::DuplicateName {
                name: candidate.to_string(),
            });
        }

        Ok(Accepted::new(candidate.to_string()))
    }
}

/// Run the host-name prompts for `count` hosts
///
/// An empty first answer selects the default alphabet. When the alphabet is
/// too short for `count`, the user is told and moved on to naming the hosts.
pub fn collect_host_names<P>(prompter: &mut P, count: usize) -> Result<Vec<String>, PromptError>
where
    P: Prompter + ?Sized,
{
    let customize = run_field(prompter, &CustomizeField)?;

    if !customize {
        match default_host_names(count) {
            Ok(names) => {
                info!("Using default host names for {} hosts", count);
                return Ok(names);
            }
            Err(err) => {
                warn!("Default host names unavailable: {}", err);
                prompter.say(&format!("{}{}", DIAGNOSTIC_PREFIX, err))?;
            }
        }
    }

    prompter.say(&format!(" You have chosen to customize your {} host names.", count))?;

    let mut names: Vec<String> = Vec::new();
    for index in 0..count {
        let name = run_field(prompter, &HostNameField::new(index, &names))?;
        names.push(name);
    }

    info!("Collected {} custom host names", names.len());
    Ok(names)
}
