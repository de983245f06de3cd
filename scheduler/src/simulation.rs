use std::collections::VecDeque;

use crate::dispatcher::ContextSwitch;
use crate::error::DispatchError;
use crate::{Clock, Cpu, Dispatcher, Pcb, Policy, ReadyQueue, Scheduler};

/// Owns the ready queue, the CPU, the clock and the scheduler/dispatcher
/// pair, and runs them in order once per tick
pub struct Simulation<Q = VecDeque<Pcb>> {
    ready_queue: Q,
    cpu: Cpu,
    clock: Clock,
    scheduler: Scheduler,
    dispatcher: Dispatcher,
}

impl<Q: ReadyQueue + Default> Simulation<Q> {
    /// Creates a simulation with an empty ready queue
    pub fn new(policy: Policy) -> Simulation<Q> {
        Simulation::with_queue(policy, Q::default())
    }
}

impl<Q: ReadyQueue> Simulation<Q> {
    /// Creates a simulation on top of an existing ready queue
    ///
    /// * `policy` - the scheduling algorithm
    /// * `ready_queue` - processes already waiting, head first
    pub fn with_queue(policy: Policy, ready_queue: Q) -> Simulation<Q> {
        let mut scheduler = Scheduler::new(policy);
        let dispatcher = Dispatcher::new();
        scheduler.attach_dispatcher(&dispatcher);

        Simulation {
            ready_queue,
            cpu: Cpu::new(),
            clock: Clock::new(),
            scheduler,
            dispatcher,
        }
    }

    /// Runs the scheduler, then the dispatcher
    ///
    /// Returns the context switch done in this tick, if any.
    pub fn tick(&mut self) -> Result<Option<ContextSwitch>, DispatchError> {
        self.scheduler.execute(&self.ready_queue, &self.cpu);
        self.dispatcher.execute(
            &self.scheduler,
            &mut self.ready_queue,
            &mut self.cpu,
            &mut self.clock,
        )
    }

    /// Adds an arriving process to the tail of the ready queue
    pub fn admit(&mut self, pcb: Pcb) {
        self.ready_queue.append(pcb);
    }

    /// No process left, neither running nor waiting
    pub fn is_finished(&self) -> bool {
        self.cpu.is_idle() && self.ready_queue.is_empty()
    }

    pub fn ready_queue(&self) -> &Q {
        &self.ready_queue
    }

    pub fn ready_queue_mut(&mut self) -> &mut Q {
        &mut self.ready_queue
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}
