use crate::{Cpu, Scheduler};

impl Scheduler {
    /// Round robin
    ///
    /// The head of the queue gets the CPU when the CPU is idle or the
    /// quantum of the running process ran out. The quantum was already
    /// decremented for this tick, so it is checked after the decrement.
    pub(crate) fn round_robin(&mut self, cpu: &Cpu) {
        let expired = self.timer.map_or(false, |timer| timer <= 0.0);

        if cpu.is_idle() || expired {
            self.reset_quantum();
            self.signal(0);
        }
    }
}
