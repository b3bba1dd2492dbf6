//! Platform abstraction layer
//!
//! This module provides hardware abstraction for the robot's peripherals.
//! All platform-specific code must stay behind these traits; drivers and
//! navigation logic never touch a register directly.

pub mod error;
pub mod traits;

// Mock backend (host tests and hardware-free integration)
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result};
pub use traits::{
    AnalogInterface, EdgeCaptureInterface, GpioInterface, Platform, PulseLevel, PulseSample,
    PwmInterface, TimerInterface,
};
