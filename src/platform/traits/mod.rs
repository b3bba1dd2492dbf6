//! Platform abstraction traits
//!
//! This module defines the traits that platform implementations must provide.

pub mod adc;
pub mod capture;
pub mod gpio;
pub mod platform;
pub mod pwm;
pub mod timer;

// Re-export trait interfaces
pub use adc::AnalogInterface;
pub use capture::{EdgeCaptureInterface, PulseLevel, PulseSample};
pub use gpio::{GpioInterface, GpioMode};
pub use platform::Platform;
pub use pwm::PwmInterface;
pub use timer::TimerInterface;
