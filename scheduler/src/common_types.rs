use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// The fixed amount of simulated time that passes in one step.
///
/// The quantum timer, the clock and the remaining time of a process all
/// move by this amount.
pub const SIM_UNIT: f32 = 0.5;

/// Identifier of a simulated process
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pid(usize);

impl Pid {
    /// Creates a new Pid object
    ///
    /// * `pid` - the process identifier as usize
    pub fn new(pid: usize) -> Pid {
        Pid(pid)
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl Add<usize> for Pid {
    type Output = Pid;

    fn add(self, rhs: usize) -> Self::Output {
        Pid::new(self.0 + rhs)
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A point on the simulated time line, counted in whole steps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(usize);

impl Timestamp {
    /// Creates a new Timestamp object
    ///
    /// * `steps` - number of simulation steps since the start
    pub fn new(steps: usize) -> Timestamp {
        Timestamp(steps)
    }

    /// Number of steps since the start of the simulation
    pub fn steps(&self) -> usize {
        self.0
    }

    /// The time in simulation units
    pub fn as_units(&self) -> f32 {
        self.0 as f32 * SIM_UNIT
    }
}

impl Add<usize> for Timestamp {
    type Output = Timestamp;

    fn add(self, rhs: usize) -> Self::Output {
        Timestamp::new(self.0 + rhs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.as_units())
    }
}
