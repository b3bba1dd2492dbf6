//! PWM interface trait
//!
//! Duty values are raw 8-bit compare counts (0..=255), matching the timer
//! compare registers that drive both the motor enable lines and the sensor
//! turret servo on this class of hardware.

use crate::platform::Result;

/// PWM output interface trait
pub trait PwmInterface {
    /// Set the output compare value (duty) for this channel.
    ///
    /// A duty of 0 holds the line low; 255 holds it high for the full period.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Pwm` if the channel rejects the write.
    fn set_duty(&mut self, duty: u8) -> Result<()>;

    /// Get the current compare value
    fn duty(&self) -> u8;

    /// Enable the PWM output
    fn enable(&mut self);

    /// Disable the PWM output (line held low)
    fn disable(&mut self);

    /// Check whether the output is enabled
    fn is_enabled(&self) -> bool;
}
