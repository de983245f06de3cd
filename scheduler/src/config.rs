use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The scheduling algorithms the simulator knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    Fcfs,
    Srtf,
    #[serde(alias = "rr")]
    RoundRobin,
    #[serde(alias = "pp", alias = "priority")]
    PreemptivePriority,
}

impl AlgorithmKind {
    pub fn needs_quantum(&self) -> bool {
        matches!(self, AlgorithmKind::RoundRobin | AlgorithmKind::PreemptivePriority)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Fcfs => "FCFS",
            AlgorithmKind::Srtf => "SRTF",
            AlgorithmKind::RoundRobin => "Round Robin",
            AlgorithmKind::PreemptivePriority => "Preemptive Priority",
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(AlgorithmKind::Fcfs),
            "srtf" => Ok(AlgorithmKind::Srtf),
            "rr" | "round-robin" => Ok(AlgorithmKind::RoundRobin),
            "pp" | "priority" | "preemptive-priority" => Ok(AlgorithmKind::PreemptivePriority),
            other => match other.parse::<u8>() {
                Ok(selector) => AlgorithmKind::try_from(selector),
                Err(_) => Err(ConfigError::UnknownAlgorithm(s.to_string())),
            },
        }
    }
}

/// Numeric selectors: 0 = FCFS, 1 = SRTF, 2 = Round Robin, 3 = Preemptive Priority
impl TryFrom<u8> for AlgorithmKind {
    type Error = ConfigError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        match selector {
            0 => Ok(AlgorithmKind::Fcfs),
            1 => Ok(AlgorithmKind::Srtf),
            2 => Ok(AlgorithmKind::RoundRobin),
            3 => Ok(AlgorithmKind::PreemptivePriority),
            other => Err(ConfigError::UnknownAlgorithm(other.to_string())),
        }
    }
}

/// A validated scheduling policy, with its quantum where it has one
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Policy {
    Fcfs,
    Srtf,
    RoundRobin { quantum: f32 },
    PreemptivePriority { quantum: f32 },
}

impl Policy {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Policy::Fcfs => AlgorithmKind::Fcfs,
            Policy::Srtf => AlgorithmKind::Srtf,
            Policy::RoundRobin { .. } => AlgorithmKind::RoundRobin,
            Policy::PreemptivePriority { .. } => AlgorithmKind::PreemptivePriority,
        }
    }

    pub fn quantum(&self) -> Option<f32> {
        match self {
            Policy::RoundRobin { quantum } | Policy::PreemptivePriority { quantum } => Some(*quantum),
            _ => None,
        }
    }
}

/// Scheduler configuration as it appears in a workload file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    pub algorithm: AlgorithmKind,
    #[serde(default)]
    pub quantum: Option<f32>,
}

impl SchedulerConfig {
    /// Checks the configuration and builds the policy it describes
    ///
    /// The quantum is ignored by algorithms that don't use one.
    pub fn policy(&self) -> Result<Policy, ConfigError> {
        if !self.algorithm.needs_quantum() {
            return Ok(match self.algorithm {
                AlgorithmKind::Fcfs => Policy::Fcfs,
                _ => Policy::Srtf,
            });
        }

        let quantum = self
            .quantum
            .ok_or(ConfigError::MissingQuantum(self.algorithm.name()))?;
        if !quantum.is_finite() || quantum <= 0.0 {
            return Err(ConfigError::InvalidQuantum(quantum));
        }

        Ok(match self.algorithm {
            AlgorithmKind::RoundRobin => Policy::RoundRobin { quantum },
            _ => Policy::PreemptivePriority { quantum },
        })
    }
}
