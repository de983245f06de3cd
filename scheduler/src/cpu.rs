use crate::Pcb;

/// The simulated processor, with room for a single running process
#[derive(Debug, Default)]
pub struct Cpu {
    running: Option<Pcb>,
}

impl Cpu {
    pub fn new() -> Cpu {
        Cpu { running: None }
    }

    pub fn is_idle(&self) -> bool {
        self.running.is_none()
    }

    pub fn current(&self) -> Option<&Pcb> {
        self.running.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut Pcb> {
        self.running.as_mut()
    }

    /// Puts `pcb` on the processor and returns the previous occupant
    pub fn install(&mut self, pcb: Pcb) -> Option<Pcb> {
        self.running.replace(pcb)
    }

    /// Moves the running process off the processor, leaving it idle
    pub fn take(&mut self) -> Option<Pcb> {
        self.running.take()
    }
}
