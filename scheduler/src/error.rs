use std::fmt;

/// Errors reported by the dispatcher when the scheduler's decision can't be
/// carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchError {
    /// An interrupt was pending but no ready queue index was ever chosen
    NoDecision,
    /// The chosen index does not point into the ready queue
    InvalidIndex { index: usize, len: usize },
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::NoDecision => write!(f, "interrupt pending without a scheduling decision"),
            DispatchError::InvalidIndex { index, len } => {
                write!(f, "ready queue index {} out of range (queue holds {})", index, len)
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// Errors found while turning a configuration into a scheduling policy
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Name or selector that matches no algorithm
    UnknownAlgorithm(String),
    /// The algorithm needs a time quantum and none was given
    MissingQuantum(&'static str),
    /// Quantum is zero, negative or not a number
    InvalidQuantum(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownAlgorithm(name) => write!(f, "unknown scheduling algorithm `{}`", name),
            ConfigError::MissingQuantum(algorithm) => {
                write!(f, "{} needs a time quantum", algorithm)
            }
            ConfigError::InvalidQuantum(quantum) => {
                write!(f, "time quantum must be a positive number, got {}", quantum)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
