use chrono::{Local, Timelike};
use std::fmt::Debug;

/// Source of the caller's local wall-clock hour.
pub trait Clock: Send + Sync + Debug {
    /// Current local hour, 0-23.
    fn local_hour(&self) -> u32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn local_hour(&self) -> u32 {
        Local::now().hour()
    }
}

/// Clock pinned to a single hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn local_hour(&self) -> u32 {
        self.0 % 24
    }
}
