use crate::{Cpu, ReadyQueue, Scheduler};

impl Scheduler {
    /// Shortest remaining time first
    ///
    /// Picks the leftmost entry with the smallest `time_left`, as long as it
    /// is strictly shorter than the running process. Ties keep arrival order
    /// and never preempt.
    pub(crate) fn srtf<Q: ReadyQueue + ?Sized>(&mut self, ready_queue: &Q, cpu: &Cpu) {
        let (mut short_time, mut short_index) = match (cpu.current(), ready_queue.head()) {
            (Some(running), _) => (running.time_left, None),
            (None, Some(head)) => (head.time_left, Some(0)),
            (None, None) => return,
        };

        for index in 0..ready_queue.size() {
            if let Some(pcb) = ready_queue.get(index) {
                if pcb.time_left < short_time {
                    short_time = pcb.time_left;
                    short_index = Some(index);
                }
            }
        }

        /* None here means the running process is already the shortest one */
        if let Some(index) = short_index {
            self.signal(index);
        }
    }
}
