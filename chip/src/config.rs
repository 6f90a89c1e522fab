//! Runtime configuration of the chipset.
//!
//! Behaviour that differs between chip8 interpreters is opt-in here,
//! the defaults follow the reference instruction set.

use crate::definitions::{cpu, timer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// If set `FX1E` writes `VF = 1` when `I + VX` leaves the 12-bit
    /// address range and `VF = 0` otherwise.
    pub index_overflow_flag: bool,
    /// The rate a host should step the chipset at. The chipset itself
    /// never sleeps.
    pub cpu_hertz: u64,
    /// The rate a host should call the timer tick at.
    pub timer_hertz: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            index_overflow_flag: false,
            cpu_hertz: cpu::HERTZ,
            timer_hertz: timer::HERTZ,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_index_overflow_flag(mut self, enabled: bool) -> Self {
        self.index_overflow_flag = enabled;
        self
    }

    pub fn with_cpu_hertz(mut self, hertz: u64) -> Self {
        self.cpu_hertz = hertz;
        self
    }

    pub fn with_timer_hertz(mut self, hertz: u64) -> Self {
        self.timer_hertz = hertz;
        self
    }

    /// How many instructions fit in between two timer ticks, at least one.
    pub fn cycles_per_tick(&self) -> u64 {
        if self.timer_hertz == 0 {
            return self.cpu_hertz.max(1);
        }
        (self.cpu_hertz / self.timer_hertz).max(1)
    }
}
