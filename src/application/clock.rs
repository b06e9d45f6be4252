// src/application/clock.rs
use chrono::Utc;

/// Source of "now" for note timestamps.
pub trait Clock {
    /// Current time as epoch milliseconds.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}
