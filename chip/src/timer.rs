//! The delay and sound timers.
//!
//! Both count down at 60Hz until they reach 0. The chipset doesn't own a
//! clock, the host calls [`Timer::tick`](Timer::tick) (through the chipset)
//! at the configured rate.

/// Represents a timer inside of the chip
/// infrastruture, it will count down to
/// zero from what ever number given.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    value: u8,
}

impl Timer {
    /// Will create a new timer with the given value.
    pub fn new(value: u8) -> Self {
        Self { value }
    }

    /// Will set the value from which the timer shall count down from.
    pub fn set_value(&mut self, value: u8) {
        self.value = value;
    }

    /// Will get the value that the counter is currently at.
    pub fn get_value(&self) -> u8 {
        self.value
    }

    pub fn is_active(&self) -> bool {
        self.value > 0
    }

    /// Counts down by one, stays at zero.
    pub fn tick(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}
