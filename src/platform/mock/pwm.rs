//! Mock PWM implementation for testing

use crate::platform::{traits::PwmInterface, Result};

/// Mock PWM implementation
///
/// Tracks the compare value and enabled state, and records every duty write
/// so tests can check the order the turret stepped through.
#[derive(Debug)]
pub struct MockPwm {
    duty: u8,
    enabled: bool,
    writes: heapless::Vec<u8, 32>,
}

impl MockPwm {
    /// Create a new mock PWM with duty 0, enabled
    pub fn new() -> Self {
        Self {
            duty: 0,
            enabled: true,
            writes: heapless::Vec::new(),
        }
    }

    /// Duty values written so far, oldest first
    pub fn writes(&self) -> &[u8] {
        &self.writes
    }
}

impl Default for MockPwm {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmInterface for MockPwm {
    fn set_duty(&mut self, duty: u8) -> Result<()> {
        self.duty = duty;
        let _ = self.writes.push(duty);
        Ok(())
    }

    fn duty(&self) -> u8 {
        self.duty
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_pwm_duty() {
        let mut pwm = MockPwm::new();
        assert_eq!(pwm.duty(), 0);

        pwm.set_duty(21).unwrap();
        assert_eq!(pwm.duty(), 21);

        pwm.set_duty(36).unwrap();
        assert_eq!(pwm.writes(), &[21, 36]);
    }

    #[test]
    fn test_mock_pwm_enable() {
        let mut pwm = MockPwm::new();
        assert!(pwm.is_enabled());

        pwm.disable();
        assert!(!pwm.is_enabled());

        pwm.enable();
        assert!(pwm.is_enabled());
    }
}
