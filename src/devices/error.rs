//! Device error types
//!
//! Failure kinds for the driver layer. Nothing here is fatal: decode and
//! range timeouts recover locally, and the controller treats an unknown
//! distance by stopping rather than acting on stale data.

use core::fmt;

use crate::platform::PlatformError;

/// Result type for device operations
pub type Result<T> = core::result::Result<T, DeviceError>;

/// Driver-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError {
    /// Underlying platform operation failed
    Platform(PlatformError),
    /// Frame window elapsed without a complete 32-bit frame
    DecodeTimeout,
    /// Echo not observed within the bounded wait
    RangeTimeout,
    /// Servo feedback never entered the target band within the bounded wait
    ServoSettleTimeout,
    /// Decoded a 32-bit code with no mapping in the command table
    UnknownCommand {
        /// The unmapped code
        code: u32,
    },
}

impl From<PlatformError> for DeviceError {
    fn from(e: PlatformError) -> Self {
        DeviceError::Platform(e)
    }
}

impl fmt::Display for DeviceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Platform(e) => write!(f, "platform: {}", e),
            DeviceError::DecodeTimeout => write!(f, "IR frame window elapsed mid-frame"),
            DeviceError::RangeTimeout => write!(f, "no echo within bounded wait"),
            DeviceError::ServoSettleTimeout => {
                write!(f, "servo feedback never reached target band")
            }
            DeviceError::UnknownCommand { code } => {
                write!(f, "unmapped IR code {:#010x}", code)
            }
        }
    }
}
