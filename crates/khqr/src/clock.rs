//! Wall-clock seam for the timestamp extension field.
//!
//! The builder never reads time directly; it takes a [`Clock`] so tests
//! can inject a fixed instant and get byte-identical payloads.

/// Source of the current time in Unix epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}
