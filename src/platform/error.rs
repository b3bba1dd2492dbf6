//! Platform error types
//!
//! This module defines error types for platform operations.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// PWM operation failed
    Pwm(PwmError),
    /// ADC operation failed
    Adc(AdcError),
    /// Edge capture operation failed
    Capture(CaptureError),
    /// Timer operation failed
    Timer(TimerError),
    /// Platform initialization failed
    InitializationFailed,
    /// Invalid configuration provided
    InvalidConfig,
    /// Resource not available
    ResourceUnavailable,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Invalid pin number
    InvalidPin,
    /// Invalid mode for operation
    InvalidMode,
    /// Pin already in use
    PinInUse,
}

/// PWM-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmError {
    /// Channel not available
    ChannelUnavailable,
    /// Output not enabled
    NotEnabled,
}

/// ADC-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete
    ConversionFailed,
    /// Invalid channel number
    InvalidChannel,
}

/// Edge-capture-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CaptureError {
    /// Counter overflowed between edges
    Overflow,
    /// Capture unit not configured
    NotConfigured,
}

/// Timer-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerError {
    /// Timer overflow
    Overflow,
    /// Invalid duration
    InvalidDuration,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Gpio(e) => write!(f, "GPIO error: {:?}", e),
            PlatformError::Pwm(e) => write!(f, "PWM error: {:?}", e),
            PlatformError::Adc(e) => write!(f, "ADC error: {:?}", e),
            PlatformError::Capture(e) => write!(f, "capture error: {:?}", e),
            PlatformError::Timer(e) => write!(f, "timer error: {:?}", e),
            PlatformError::InitializationFailed => write!(f, "platform initialization failed"),
            PlatformError::InvalidConfig => write!(f, "invalid configuration"),
            PlatformError::ResourceUnavailable => write!(f, "resource not available"),
        }
    }
}
