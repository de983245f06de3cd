//! A CPU scheduling simulator.
//!
//! This library provides the scheduler, the dispatcher and the pieces they
//! work on (ready queue, CPU, clock) to simulate preemptive and
//! non-preemptive scheduling on a single processor.
//!
//! Every tick the driver calls `Scheduler::execute()` and then
//! `Dispatcher::execute()`, or lets a `Simulation` do both.
//!

mod common_types;
pub use crate::common_types::{Pid, Timestamp, SIM_UNIT};

mod process_control_block;
pub use crate::process_control_block::Pcb;

mod ready_queue;
pub use crate::ready_queue::ReadyQueue;

mod cpu;
pub use crate::cpu::Cpu;

mod clock;
pub use crate::clock::Clock;

mod config;
pub use crate::config::{AlgorithmKind, Policy, SchedulerConfig};

mod error;
pub use crate::error::{ConfigError, DispatchError};

mod scheduler;
pub use crate::scheduler::Scheduler;

mod schedulers;

mod dispatcher;
pub use crate::dispatcher::{ContextSwitch, Dispatcher, InterruptLine};

mod simulation;
pub use crate::simulation::Simulation;

/// Returns a first come, first served simulation
pub fn fcfs() -> Simulation {
    Simulation::new(Policy::Fcfs)
}

/// Returns a shortest remaining time first simulation
pub fn srtf() -> Simulation {
    Simulation::new(Policy::Srtf)
}

/// Returns a round robin simulation
///
/// * `quantum` - the time a process can run before it is preempted
pub fn round_robin(quantum: f32) -> Simulation {
    Simulation::new(Policy::RoundRobin { quantum })
}

/// Returns a preemptive priority simulation
///
/// * `quantum` - the time after which a process can be preempted by
///               another process of higher priority
pub fn preemptive_priority(quantum: f32) -> Simulation {
    Simulation::new(Policy::PreemptivePriority { quantum })
}

#[cfg(test)]
mod tests;
