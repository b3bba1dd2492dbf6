//! Mock Timer implementation for testing

use crate::platform::{traits::TimerInterface, Result};

/// Mock Timer implementation
///
/// Advances simulated time on every delay. Deadline loops in the drivers
/// terminate under this mock because each poll iteration delays, which moves
/// `now_us` forward.
#[derive(Debug)]
pub struct MockTimer {
    now_us: u64,
}

impl MockTimer {
    /// Create a new mock timer at t=0
    pub fn new() -> Self {
        Self { now_us: 0 }
    }
}

impl Default for MockTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerInterface for MockTimer {
    fn delay_us(&mut self, us: u32) -> Result<()> {
        self.now_us = self.now_us.wrapping_add(us as u64);
        Ok(())
    }

    fn now_us(&self) -> u64 {
        self.now_us
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_timer_delay_us() {
        let mut timer = MockTimer::new();
        assert_eq!(timer.now_us(), 0);

        timer.delay_us(1000).unwrap();
        assert_eq!(timer.now_us(), 1000);

        timer.delay_us(500).unwrap();
        assert_eq!(timer.now_us(), 1500);
    }

    #[test]
    fn test_mock_timer_delay_ms() {
        let mut timer = MockTimer::new();
        timer.delay_ms(5).unwrap();
        assert_eq!(timer.now_us(), 5000);
        assert_eq!(timer.now_ms(), 5);
    }
}
