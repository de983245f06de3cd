use std::fmt;

use serde::{Deserialize, Serialize};

use cpu_scheduler::{Pcb, Pid, SchedulerConfig};

/// Largest arrival or burst time a workload may use
///
/// Below this, neighbouring `f32` values are closer together than
/// `SIM_UNIT`, so every tick makes progress.
pub const MAX_TIME: f32 = 1_000_000.0;

#[derive(Debug)]
pub enum WorkloadError {
    /// The file is not a valid workload
    Parse(serde_json::Error),
    /// Arrival time is negative, too large or not a number
    InvalidArrival { pid: Pid, arrival: f32 },
    /// Burst time is negative, too large or not a number
    InvalidBurst { pid: Pid, burst: f32 },
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkloadError::Parse(err) => write!(f, "{}", err),
            WorkloadError::InvalidArrival { pid, arrival } => {
                write!(f, "process {}: arrival {} is not in 0..={}", pid, arrival, MAX_TIME)
            }
            WorkloadError::InvalidBurst { pid, burst } => {
                write!(f, "process {}: burst {} is not in 0..={}", pid, burst, MAX_TIME)
            }
        }
    }
}

impl std::error::Error for WorkloadError {}

impl From<serde_json::Error> for WorkloadError {
    fn from(err: serde_json::Error) -> Self {
        WorkloadError::Parse(err)
    }
}

fn in_range(time: f32) -> bool {
    time.is_finite() && (0.0..=MAX_TIME).contains(&time)
}

/// A process that shows up at `arrival` and needs `burst` units of CPU
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub pid: Pid,
    #[serde(default)]
    pub arrival: f32,
    pub burst: f32,
    #[serde(default)]
    pub priority: i32,
}

impl ProcessSpec {
    pub fn spawn(&self) -> Pcb {
        Pcb::new(self.pid, self.burst, self.priority)
    }

    pub fn validate(&self) -> Result<(), WorkloadError> {
        if !in_range(self.arrival) {
            return Err(WorkloadError::InvalidArrival { pid: self.pid, arrival: self.arrival });
        }
        if !in_range(self.burst) {
            return Err(WorkloadError::InvalidBurst { pid: self.pid, burst: self.burst });
        }

        Ok(())
    }
}

/// Everything a simulation run needs, as read from a JSON file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Workload {
    pub scheduler: SchedulerConfig,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Parses a workload and checks every process in it
    pub fn from_json(text: &str) -> Result<Workload, WorkloadError> {
        let workload: Workload = serde_json::from_str(text)?;
        for spec in workload.processes.iter() {
            spec.validate()?;
        }

        Ok(workload)
    }
}
