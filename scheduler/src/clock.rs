use crate::common_types::Timestamp;

/// Logical simulation clock
///
/// Only moves forward, one `SIM_UNIT` per step.
#[derive(Debug, Default)]
pub struct Clock {
    now: Timestamp,
}

impl Clock {
    pub fn new() -> Clock {
        Clock { now: Timestamp::new(0) }
    }

    pub fn step(&mut self) {
        self.now = self.now + 1;
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn steps(&self) -> usize {
        self.now.steps()
    }
}
