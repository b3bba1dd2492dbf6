//! Mock Platform implementation for testing

use crate::platform::{
    error::{AdcError, GpioError, PlatformError, PwmError},
    traits::{GpioMode, Platform},
    Result,
};

use super::{MockAnalog, MockEdgeCapture, MockGpio, MockPwm, MockTimer};

/// Mock Platform implementation
///
/// Hands out mock peripherals and tracks allocations so tests catch a pin or
/// channel claimed twice.
#[derive(Debug)]
pub struct MockPlatform {
    gpio_allocated: heapless::Vec<u8, 32>,
    pwm_allocated: heapless::Vec<u8, 8>,
    capture_taken: bool,
}

impl MockPlatform {
    /// Create a new mock platform
    pub fn new() -> Self {
        Self {
            gpio_allocated: heapless::Vec::new(),
            pwm_allocated: heapless::Vec::new(),
            capture_taken: false,
        }
    }

    /// Maximum GPIO pin number
    pub const MAX_GPIO: u8 = 19;

    /// Number of PWM channels
    pub const MAX_PWM: u8 = 6;

    /// Number of ADC channels
    pub const MAX_ADC: u8 = 6;
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl Platform for MockPlatform {
    type Gpio = MockGpio;
    type Pwm = MockPwm;
    type Adc = MockAnalog;
    type Capture = MockEdgeCapture;
    type Timer = MockTimer;

    fn create_gpio(&mut self, pin: u8, mode: GpioMode) -> Result<Self::Gpio> {
        if pin > Self::MAX_GPIO {
            return Err(PlatformError::Gpio(GpioError::InvalidPin));
        }
        if self.gpio_allocated.contains(&pin) {
            return Err(PlatformError::Gpio(GpioError::PinInUse));
        }
        let _ = self.gpio_allocated.push(pin);
        Ok(match mode {
            GpioMode::OutputPushPull => MockGpio::new_output(),
            _ => MockGpio::new_input(),
        })
    }

    fn create_pwm(&mut self, channel: u8) -> Result<Self::Pwm> {
        if channel >= Self::MAX_PWM || self.pwm_allocated.contains(&channel) {
            return Err(PlatformError::Pwm(PwmError::ChannelUnavailable));
        }
        let _ = self.pwm_allocated.push(channel);
        Ok(MockPwm::new())
    }

    fn create_adc(&mut self, channel: u8) -> Result<Self::Adc> {
        if channel >= Self::MAX_ADC {
            return Err(PlatformError::Adc(AdcError::InvalidChannel));
        }
        Ok(MockAnalog::constant(0))
    }

    fn create_capture(&mut self) -> Result<Self::Capture> {
        if self.capture_taken {
            return Err(PlatformError::ResourceUnavailable);
        }
        self.capture_taken = true;
        Ok(MockEdgeCapture::new())
    }

    fn create_timer(&mut self) -> Result<Self::Timer> {
        Ok(MockTimer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_platform_gpio_allocation() {
        let mut platform = MockPlatform::new();
        assert!(platform.create_gpio(7, GpioMode::OutputPushPull).is_ok());
        assert_eq!(
            platform.create_gpio(7, GpioMode::Input).err(),
            Some(PlatformError::Gpio(GpioError::PinInUse))
        );
        assert_eq!(
            platform.create_gpio(99, GpioMode::Input).err(),
            Some(PlatformError::Gpio(GpioError::InvalidPin))
        );
    }

    #[test]
    fn test_mock_platform_single_capture_unit() {
        let mut platform = MockPlatform::new();
        assert!(platform.create_capture().is_ok());
        assert_eq!(
            platform.create_capture().err(),
            Some(PlatformError::ResourceUnavailable)
        );
    }

    #[test]
    fn test_mock_platform_pwm_channels() {
        let mut platform = MockPlatform::new();
        assert!(platform.create_pwm(0).is_ok());
        assert!(platform.create_pwm(6).is_err());
        assert!(platform.create_pwm(0).is_err());
    }
}
