use serde::{Deserialize, Serialize};

use crate::common_types::{Pid, SIM_UNIT};

/// The process control block of a simulated process
///
/// A block lives either in the ready queue or in the CPU slot, never in
/// both. It is moved between the two by the dispatcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pcb {
    /// The PID of the process
    pub pid: Pid,
    /// Execution time the process still needs
    ///
    /// Never negative. A block that reaches 0 is retired by the driver.
    pub time_left: f32,
    /// The priority of the process, a lower value means a higher priority
    pub priority: i32,
    /// Time accumulated while waiting
    #[serde(default)]
    pub wait_time: f32,
    /// The number of times the process was switched out of the CPU
    #[serde(default)]
    pub num_context: usize,
}

impl Pcb {
    /// Creates a new Process Control Block
    ///
    /// * `pid` - PID of the new process
    /// * `time_left` - total execution time the process needs
    /// * `priority` - priority of the new process
    pub fn new(pid: Pid, time_left: f32, priority: i32) -> Pcb {
        Pcb {
            pid,
            time_left: time_left.max(0.0),
            priority,
            wait_time: 0.0,
            num_context: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.time_left <= 0.0
    }

    /// Runs the process for one simulation unit
    pub fn execute(&mut self) {
        self.time_left = (self.time_left - SIM_UNIT).max(0.0);
    }

    /// Charges `time` units of waiting to the process
    pub fn add_wait(&mut self, time: f32) {
        self.wait_time += time;
    }
}
