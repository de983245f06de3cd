use crate::{Cpu, ReadyQueue, Scheduler};

impl Scheduler {
    /// Preemptive priority with a time quantum
    ///
    /// Lower values mean higher priority. A queued process with a strictly
    /// better priority than the running one takes the CPU. On equal
    /// priority the running process stays.
    pub(crate) fn preemptive_priority<Q: ReadyQueue + ?Sized>(&mut self, ready_queue: &Q, cpu: &Cpu) {
        /* The quantum moves twice per tick under this policy: once in
        execute() and once here */
        self.tick_quantum();

        let running_prio = cpu.current().map(|pcb| pcb.priority);
        let mut highest_prio = running_prio.unwrap_or(i32::MAX);
        let mut highest_prio_index: Option<usize> = None;

        for index in 0..ready_queue.size() {
            if let Some(pcb) = ready_queue.get(index) {
                if pcb.priority < highest_prio {
                    highest_prio = pcb.priority;
                    highest_prio_index = Some(index);
                }
            }
        }

        let expired = self.timer.map_or(false, |timer| timer <= 0.0);
        let better = running_prio.map_or(true, |prio| highest_prio < prio);

        if let Some(index) = highest_prio_index {
            if expired || better {
                self.reset_quantum();
                self.signal(index);
                return;
            }
        }

        if cpu.is_idle() {
            self.reset_quantum();
            self.signal(highest_prio_index.unwrap_or(0));
        }
    }
}
