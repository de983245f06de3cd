use std::cell::OnceCell;

use log::{debug, trace, warn};

use crate::common_types::SIM_UNIT;
use crate::config::Policy;
use crate::dispatcher::{Dispatcher, InterruptLine};
use crate::{Cpu, ReadyQueue};

/// Decides, once per tick, whether the running process should be switched
/// out and which ready queue entry should take its place
///
/// The decision is left in `next_index()` for the dispatcher, and the
/// dispatcher is told to act through the interrupt line it handed over in
/// `attach_dispatcher()`.
pub struct Scheduler {
    /// Selected algorithm
    pub(crate) policy: Policy,
    /// Time left of the current quantum
    ///
    /// `None` for the algorithms that don't use a quantum
    pub(crate) timer: Option<f32>,
    /// Ready queue index chosen by the last decision
    pub(crate) next_pcb_index: Option<usize>,
    /// Interrupt line of the attached dispatcher, set at most once
    dispatcher: OnceCell<InterruptLine>,
}

impl Scheduler {
    /// Creates a new scheduler
    ///
    /// * `policy` - the algorithm to use; quantum based policies start with a
    ///              full quantum
    pub fn new(policy: Policy) -> Scheduler {
        Scheduler {
            policy,
            timer: policy.quantum(),
            next_pcb_index: None,
            dispatcher: OnceCell::new(),
        }
    }

    /// Binds the dispatcher this scheduler interrupts
    ///
    /// Only the first call has an effect, later ones are ignored.
    pub fn attach_dispatcher(&mut self, dispatcher: &Dispatcher) {
        if self.dispatcher.set(dispatcher.line()).is_err() {
            warn!("scheduler already has a dispatcher, ignoring the new one");
        }
    }

    pub fn next_index(&self) -> Option<usize> {
        self.next_pcb_index
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn quantum_left(&self) -> Option<f32> {
        self.timer
    }

    /// Runs one decision cycle
    ///
    /// * `ready_queue` - processes waiting for the CPU
    /// * `cpu` - the processor, idle or running a process
    pub fn execute<Q: ReadyQueue + ?Sized>(&mut self, ready_queue: &Q, cpu: &Cpu) {
        self.tick_quantum();

        if ready_queue.is_empty() {
            trace!("ready queue empty, nothing to schedule");
            return;
        }

        match self.policy {
            Policy::Fcfs => self.fcfs(cpu),
            Policy::Srtf => self.srtf(ready_queue, cpu),
            Policy::RoundRobin { .. } => self.round_robin(cpu),
            Policy::PreemptivePriority { .. } => self.preemptive_priority(ready_queue, cpu),
        }
    }

    /// Consumes one simulation unit of the running quantum
    ///
    /// A quantum that already ran out is left alone.
    pub(crate) fn tick_quantum(&mut self) {
        if let Some(timer) = self.timer.as_mut() {
            if *timer > 0.0 {
                *timer -= SIM_UNIT;
                trace!("quantum left: {}", *timer);
            }
        }
    }

    pub(crate) fn reset_quantum(&mut self) {
        if let Some(quantum) = self.policy.quantum() {
            self.timer = Some(quantum);
        }
    }

    /// Records `index` as the next process and interrupts the dispatcher
    pub(crate) fn signal(&mut self, index: usize) {
        self.next_pcb_index = Some(index);

        match self.dispatcher.get() {
            Some(line) => {
                debug!("{}: switch to ready queue index {}", self.policy.kind(), index);
                line.raise();
            }
            None => warn!("no dispatcher attached, switch to index {} is lost", index),
        }
    }
}
