use std::collections::VecDeque;
use std::fmt;

use log::{debug, info};

use cpu_scheduler::{DispatchError, Pcb, Policy, Simulation, Timestamp, SIM_UNIT};

use crate::workload::{ProcessSpec, WorkloadError};

/// Feeds processes into a simulation and moves them forward in time
///
/// Each tick admits the processes that arrived, lets the scheduler and the
/// dispatcher run, then executes the running process for one unit and
/// charges one unit of wait to everything still queued.
pub struct Driver {
    sim: Simulation,
    /// Not yet arrived, ordered by arrival time
    pending: VecDeque<ProcessSpec>,
    finished: Vec<Pcb>,
    ticks: usize,
}

impl Driver {
    /// Creates a driver for `processes`
    ///
    /// Fails if a process has an arrival or burst time the simulation can't
    /// reach.
    pub fn new(policy: Policy, mut processes: Vec<ProcessSpec>) -> Result<Driver, WorkloadError> {
        for spec in processes.iter() {
            spec.validate()?;
        }

        /* stable, so equal arrivals keep file order */
        processes.sort_by(|a, b| a.arrival.total_cmp(&b.arrival));

        Ok(Driver {
            sim: Simulation::new(policy),
            pending: processes.into(),
            finished: Vec::new(),
            ticks: 0,
        })
    }

    pub fn now(&self) -> f32 {
        self.ticks as f32 * SIM_UNIT
    }

    /// Runs the simulation until every process finished
    pub fn run(mut self) -> Result<Report, DispatchError> {
        info!("running {} processes", self.pending.len());

        loop {
            self.admit_arrivals();
            if self.pending.is_empty() && self.sim.is_finished() {
                break;
            }

            self.tick()?;
        }

        let elapsed = self.now();

        Ok(Report {
            policy: self.sim.scheduler().policy(),
            clock: self.sim.clock().now(),
            processes: self.finished,
            elapsed,
        })
    }

    fn admit_arrivals(&mut self) {
        let now = self.now();

        while self.pending.front().map_or(false, |p| p.arrival <= now) {
            if let Some(spec) = self.pending.pop_front() {
                debug!("process {} arrived at {}", spec.pid, now);
                self.sim.admit(spec.spawn());
            }
        }
    }

    fn tick(&mut self) -> Result<(), DispatchError> {
        self.sim.tick()?;

        for pcb in self.sim.ready_queue_mut().iter_mut() {
            pcb.add_wait(SIM_UNIT);
        }

        if let Some(running) = self.sim.cpu_mut().current_mut() {
            running.execute();
        }

        if self.sim.cpu().current().map_or(false, Pcb::is_finished) {
            if let Some(done) = self.sim.cpu_mut().take() {
                debug!("process {} finished", done.pid);
                self.finished.push(done);
            }
        }

        self.ticks += 1;
        Ok(())
    }
}

/// Outcome of a simulation run
#[derive(Debug)]
pub struct Report {
    pub policy: Policy,
    /// Finished processes, in completion order
    pub processes: Vec<Pcb>,
    /// Clock value, moved only by context switches
    pub clock: Timestamp,
    /// Simulated time the run took
    pub elapsed: f32,
}

impl Report {
    pub fn average_wait(&self) -> f32 {
        if self.processes.is_empty() {
            return 0.0;
        }

        let total: f32 = self.processes.iter().map(|p| p.wait_time).sum();
        total / self.processes.len() as f32
    }

    pub fn context_switches(&self) -> usize {
        self.processes.iter().map(|p| p.num_context).sum()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "algorithm: {}", self.policy.kind())?;
        if let Some(quantum) = self.policy.quantum() {
            writeln!(f, "quantum: {:.1}", quantum)?;
        }
        writeln!(f, "{:>6} {:>10} {:>10}", "pid", "wait", "switches")?;

        let mut processes: Vec<&Pcb> = self.processes.iter().collect();
        processes.sort_by_key(|p| p.pid);
        for pcb in processes {
            writeln!(f, "{:>6} {:>10.1} {:>10}", pcb.pid, pcb.wait_time, pcb.num_context)?;
        }

        writeln!(f, "average wait: {:.2}", self.average_wait())?;
        writeln!(f, "context switches: {}", self.context_switches())?;
        writeln!(f, "switch clock: {}", self.clock)?;
        write!(f, "elapsed: {:.1}", self.elapsed)
    }
}
