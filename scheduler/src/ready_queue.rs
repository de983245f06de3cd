use std::collections::VecDeque;

use crate::Pcb;

/// Operations the scheduler and dispatcher need from the ready queue
///
/// Index 0 is the entry that arrived first. Indices are only valid while
/// the queue is unchanged.
pub trait ReadyQueue {
    fn size(&self) -> usize;

    /// Returns the entry at index 0
    fn head(&self) -> Option<&Pcb> {
        self.get(0)
    }

    fn get(&self, index: usize) -> Option<&Pcb>;

    /// Removes the entry at `index` and hands it to the caller
    fn remove(&mut self, index: usize) -> Option<Pcb>;

    /// Appends `pcb` to the tail of the queue
    fn append(&mut self, pcb: Pcb);

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl ReadyQueue for VecDeque<Pcb> {
    fn size(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> Option<&Pcb> {
        VecDeque::get(self, index)
    }

    fn remove(&mut self, index: usize) -> Option<Pcb> {
        VecDeque::remove(self, index)
    }

    fn append(&mut self, pcb: Pcb) {
        self.push_back(pcb);
    }
}
