use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use crate::common_types::{Pid, Timestamp, SIM_UNIT};
use crate::error::DispatchError;
use crate::{Clock, Cpu, ReadyQueue, Scheduler};

/// One-shot pending switch flag shared between a dispatcher and the
/// scheduler that interrupts it
#[derive(Clone, Debug, Default)]
pub struct InterruptLine(Rc<Cell<bool>>);

impl InterruptLine {
    pub fn raise(&self) {
        self.0.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }

    fn clear(&self) {
        self.0.set(false);
    }
}

/// What a dispatcher did when it carried out a switch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContextSwitch {
    /// The process now on the CPU
    pub incoming: Pid,
    /// The process moved back to the ready queue, if the CPU was busy
    pub outgoing: Option<Pid>,
    /// Clock value after the switch
    pub clock: Timestamp,
}

/// Performs the context switches the scheduler asks for
#[derive(Debug, Default)]
pub struct Dispatcher {
    line: InterruptLine,
}

impl Dispatcher {
    pub fn new() -> Dispatcher {
        Dispatcher { line: InterruptLine::default() }
    }

    /// Handle the scheduler keeps to interrupt this dispatcher
    pub fn line(&self) -> InterruptLine {
        self.line.clone()
    }

    /// Marks a switch as pending
    pub fn interrupt(&self) {
        self.line.raise();
    }

    pub fn is_pending(&self) -> bool {
        self.line.is_raised()
    }

    /// Carries out the pending switch, if there is one
    ///
    /// The entry at the scheduler's chosen index is moved onto the CPU. If
    /// the CPU was busy, the previous process goes back to the tail of the
    /// ready queue, the incoming process is charged one unit of wait and
    /// the clock steps once. A switch onto an idle CPU costs nothing.
    ///
    /// The pending flag is cleared in every case, including errors. On error
    /// nothing is moved.
    pub fn execute<Q: ReadyQueue + ?Sized>(
        &mut self,
        scheduler: &Scheduler,
        ready_queue: &mut Q,
        cpu: &mut Cpu,
        clock: &mut Clock,
    ) -> Result<Option<ContextSwitch>, DispatchError> {
        if !self.line.is_raised() {
            return Ok(None);
        }

        let result = self.switch_context(scheduler.next_index(), ready_queue, cpu, clock);
        self.line.clear();

        result.map(Some)
    }

    fn switch_context<Q: ReadyQueue + ?Sized>(
        &self,
        next: Option<usize>,
        ready_queue: &mut Q,
        cpu: &mut Cpu,
        clock: &mut Clock,
    ) -> Result<ContextSwitch, DispatchError> {
        let index = next.ok_or(DispatchError::NoDecision)?;
        let len = ready_queue.size();
        let incoming = ready_queue
            .remove(index)
            .ok_or(DispatchError::InvalidIndex { index, len })?;
        let incoming_pid = incoming.pid;

        let outgoing = match cpu.install(incoming) {
            None => None,
            Some(mut old) => {
                old.num_context += 1;
                if let Some(new) = cpu.current_mut() {
                    new.add_wait(SIM_UNIT);
                }
                clock.step();

                let pid = old.pid;
                ready_queue.append(old);
                Some(pid)
            }
        };

        match outgoing {
            Some(pid) => debug!("switched {} -> {} at {}", pid, incoming_pid, clock.now()),
            None => debug!("loaded {} on idle cpu at {}", incoming_pid, clock.now()),
        }

        Ok(ContextSwitch {
            incoming: incoming_pid,
            outgoing,
            clock: clock.now(),
        })
    }
}
