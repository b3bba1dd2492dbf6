//! Mock GPIO implementation for testing

use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode},
    Result,
};

/// Mock GPIO implementation
///
/// Tracks pin state (high/low), mode, and the number of high pulses driven,
/// for test verification of trigger lines.
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
    rising_writes: u32,
}

impl MockGpio {
    /// Create a new mock GPIO in output mode
    pub fn new_output() -> Self {
        Self {
            state: false,
            mode: GpioMode::OutputPushPull,
            rising_writes: 0,
        }
    }

    /// Create a new mock GPIO in input mode
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
            rising_writes: 0,
        }
    }

    /// Set the input state (for simulating input pin reads)
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }

    /// Number of low-to-high transitions written so far
    pub fn rising_writes(&self) -> u32 {
        self.rising_writes
    }
}

impl GpioInterface for MockGpio {
    fn set_high(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                if !self.state {
                    self.rising_writes += 1;
                }
                self.state = true;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn set_low(&mut self) -> Result<()> {
        match self.mode {
            GpioMode::OutputPushPull => {
                self.state = false;
                Ok(())
            }
            _ => Err(PlatformError::Gpio(GpioError::InvalidMode)),
        }
    }

    fn read(&self) -> bool {
        self.state
    }

    fn set_mode(&mut self, mode: GpioMode) -> Result<()> {
        self.mode = mode;
        Ok(())
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_gpio_output() {
        let mut gpio = MockGpio::new_output();
        assert!(!gpio.read());

        gpio.set_high().unwrap();
        assert!(gpio.read());

        gpio.set_low().unwrap();
        assert!(!gpio.read());
    }

    #[test]
    fn test_mock_gpio_input_rejects_writes() {
        let mut gpio = MockGpio::new_input();
        assert!(gpio.set_high().is_err());
        assert!(gpio.set_low().is_err());

        gpio.set_input_state(true);
        assert!(gpio.read());
    }

    #[test]
    fn test_mock_gpio_counts_pulses() {
        let mut gpio = MockGpio::new_output();
        gpio.set_high().unwrap();
        gpio.set_low().unwrap();
        gpio.set_high().unwrap();
        // Setting high twice in a row is one transition
        gpio.set_high().unwrap();
        gpio.set_low().unwrap();
        assert_eq!(gpio.rising_writes(), 2);
    }
}
