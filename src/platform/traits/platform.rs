//! Platform trait
//!
//! Ties the capability traits together: a platform hands out peripheral
//! instances by index, and owns the bookkeeping that prevents double
//! allocation of a pin or channel.

use crate::platform::Result;

use super::{AnalogInterface, EdgeCaptureInterface, GpioInterface, GpioMode, PwmInterface, TimerInterface};

/// Platform trait
///
/// Implementations provide concrete peripheral types and factory methods.
/// The mock backend implements this for host tests; an MCU backend would
/// implement it over its HAL.
pub trait Platform {
    type Gpio: GpioInterface;
    type Pwm: PwmInterface;
    type Adc: AnalogInterface;
    type Capture: EdgeCaptureInterface;
    type Timer: TimerInterface;

    /// Create a GPIO pin in the given mode
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` for an
    /// out-of-range pin, `GpioError::PinInUse` for a double allocation.
    fn create_gpio(&mut self, pin: u8, mode: GpioMode) -> Result<Self::Gpio>;

    /// Create a PWM output on the given channel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm(PwmError::ChannelUnavailable)` if the
    /// channel does not exist or is taken.
    fn create_pwm(&mut self, channel: u8) -> Result<Self::Pwm>;

    /// Create an analog input on the given channel
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Adc(AdcError::InvalidChannel)` if the channel
    /// does not exist.
    fn create_adc(&mut self, channel: u8) -> Result<Self::Adc>;

    /// Create an edge capture unit
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::ResourceUnavailable` if the capture counter
    /// is already claimed.
    fn create_capture(&mut self) -> Result<Self::Capture>;

    /// Create a timer handle
    fn create_timer(&mut self) -> Result<Self::Timer>;
}
