//! Node count prompt.

use log::warn;

use super::InputError;
use crate::config::NodeLimitPolicy;
use crate::prompt::{Accepted, Field};

/// Count used when the user accepts the default
pub const DEFAULT_NODES: usize = 3;
/// Smallest network with both a sender and a receiver
pub const MIN_NODES: usize = 2;
/// Supported ceiling, equal to the size of the default host alphabet
pub const MAX_NODES: usize = 52;
/// Count from which simulation performance is known to degrade
pub const PERFORMANCE_ADVISORY_NODES: usize = 15;
/// Hard ceiling applied under the advisory policy
pub const DEFAULT_ADVISORY_CEILING: usize = 1000;

const PERFORMANCE_NOTICE: &str =
    "Please be aware simulation performance may suffer with networks larger than around 15 nodes.";

/// Asks how many hosts the generated network contains
#[derive(Debug, Clone, Copy)]
pub struct NodeCountField {
    pub policy: NodeLimitPolicy,
    /// Largest count accepted when `policy` is advisory
    pub advisory_ceiling: usize,
}

impl NodeCountField {
    pub fn new(policy: NodeLimitPolicy) -> Self {
        Self {
            policy,
            advisory_ceiling: DEFAULT_ADVISORY_CEILING,
        }
    }

    pub fn with_advisory_ceiling(mut self, ceiling: usize) -> Self {
        self.advisory_ceiling = ceiling.max(MAX_NODES);
        self
    }
}

impl Field for NodeCountField {
    type Value = usize;

    fn name(&self) -> &'static str {
        "node count"
    }

    fn prompt(&self) -> String {
        format!(
            "How many hosts (nodes) are in the network? (Default: {}): ",
            DEFAULT_NODES
        )
    }

    fn validate(&self, input: &str) -> Result<Accepted<usize>, InputError> {
        if input.is_empty() {
            return Ok(Accepted::new(DEFAULT_NODES));
        }

        let count: usize = input
            .trim()
            .parse()
            .map_err(|_| InputError::invalid("Please enter a valid integer value."))?;

        if count < MIN_NODES {
            return Err(InputError::invalid("Please enter a valid integer value."));
        }

        if count > MAX_NODES {
            let capacity = InputError::CapacityExceeded {
                requested: count,
                limit: MAX_NODES,
            };
            return match self.policy {
                NodeLimitPolicy::Strict => Err(capacity),
                NodeLimitPolicy::Advisory if count > self.advisory_ceiling => {
                    Err(InputError::CapacityExceeded {
                        requested: count,
                        limit: self.advisory_ceiling,
                    })
                }
                NodeLimitPolicy::Advisory => {
                    warn!("Accepting {} nodes above the supported ceiling of {}", count, MAX_NODES);
                    Ok(Accepted::with_notice(
                        count,
                        format!("{} {}", capacity, PERFORMANCE_NOTICE),
                    ))
                }
            };
        }

        if count >= PERFORMANCE_ADVISORY_NODES {
            return Ok(Accepted::with_notice(count, PERFORMANCE_NOTICE));
        }

        Ok(Accepted::new(count))
    }
}
