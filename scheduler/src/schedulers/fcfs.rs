use crate::{Cpu, Scheduler};

impl Scheduler {
    /// First come, first served
    ///
    /// The head of the queue is always next, and it only gets the CPU once
    /// the running process is gone.
    pub(crate) fn fcfs(&mut self, cpu: &Cpu) {
        self.next_pcb_index = Some(0);

        if cpu.is_idle() {
            self.signal(0);
        }
    }
}
