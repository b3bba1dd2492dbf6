//! Timer interface trait
//!
//! Blocking delays plus a monotonic microsecond clock. Every wait in the
//! driver layer is a deadline loop over `now_us`, never an unbounded spin.

use crate::platform::Result;

/// Timer interface trait
pub trait TimerInterface {
    /// Block for the given number of microseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay cannot be programmed.
    fn delay_us(&mut self, us: u32) -> Result<()>;

    /// Block for the given number of milliseconds
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Timer` if the delay cannot be programmed.
    fn delay_ms(&mut self, ms: u32) -> Result<()> {
        self.delay_us(ms.saturating_mul(1000))
    }

    /// Monotonic time since boot in microseconds
    fn now_us(&self) -> u64;

    /// Monotonic time since boot in milliseconds
    fn now_ms(&self) -> u64 {
        self.now_us() / 1000
    }
}
