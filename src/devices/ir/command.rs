//! IR command table
//!
//! Fixed 32-bit codes for the ELEGOO-style remote shipped with the robot.
//! One code, one action; anything else is ignored upstream.

use crate::devices::error::DeviceError;

/// Reset/restart the whole controller
pub const CODE_RESET: u32 = 0x00FF_A25D;
/// Switch control mode (manual <-> wall follow)
pub const CODE_MODE: u32 = 0x00FF_E21D;
/// Move forward
pub const CODE_FORWARD: u32 = 0x00FF_629D;
/// Move backward
pub const CODE_BACKWARD: u32 = 0x00FF_A857;
/// Turn left in place
pub const CODE_LEFT: u32 = 0x00FF_22DD;
/// Turn right in place
pub const CODE_RIGHT: u32 = 0x00FF_C23D;
/// Stop
pub const CODE_STOP: u32 = 0x00FF_02FD;
/// Decrease speed one step
pub const CODE_SPEED_DOWN: u32 = 0x00FF_E01F;
/// Increase speed one step
pub const CODE_SPEED_UP: u32 = 0x00FF_906F;

/// A decoded remote command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Intentional whole-controller restart
    Reset,
    /// Toggle manual / wall-follow mode
    SwitchMode,
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Stop,
    SpeedDown,
    SpeedUp,
}

impl Command {
    /// Map a raw 32-bit code to its command
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::UnknownCommand` for any code not in the table.
    /// Callers log and ignore it; an unmapped button press is never fatal.
    pub fn from_code(code: u32) -> Result<Self, DeviceError> {
        match code {
            CODE_RESET => Ok(Command::Reset),
            CODE_MODE => Ok(Command::SwitchMode),
            CODE_FORWARD => Ok(Command::Forward),
            CODE_BACKWARD => Ok(Command::Backward),
            CODE_LEFT => Ok(Command::TurnLeft),
            CODE_RIGHT => Ok(Command::TurnRight),
            CODE_STOP => Ok(Command::Stop),
            CODE_SPEED_DOWN => Ok(Command::SpeedDown),
            CODE_SPEED_UP => Ok(Command::SpeedUp),
            _ => Err(DeviceError::UnknownCommand { code }),
        }
    }

    /// The raw code for this command (test scripting)
    pub fn code(self) -> u32 {
        match self {
            Command::Reset => CODE_RESET,
            Command::SwitchMode => CODE_MODE,
            Command::Forward => CODE_FORWARD,
            Command::Backward => CODE_BACKWARD,
            Command::TurnLeft => CODE_LEFT,
            Command::TurnRight => CODE_RIGHT,
            Command::Stop => CODE_STOP,
            Command::SpeedDown => CODE_SPEED_DOWN,
            Command::SpeedUp => CODE_SPEED_UP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_round_trips() {
        for cmd in [
            Command::Reset,
            Command::SwitchMode,
            Command::Forward,
            Command::Backward,
            Command::TurnLeft,
            Command::TurnRight,
            Command::Stop,
            Command::SpeedDown,
            Command::SpeedUp,
        ] {
            assert_eq!(Command::from_code(cmd.code()).unwrap(), cmd);
        }
    }

    #[test]
    fn test_forward_is_exact_code() {
        assert_eq!(Command::from_code(0x00FF_629D).unwrap(), Command::Forward);
    }

    #[test]
    fn test_unknown_code_is_surfaced_not_mapped() {
        assert_eq!(
            Command::from_code(0xDEAD_BEEF),
            Err(DeviceError::UnknownCommand { code: 0xDEAD_BEEF })
        );
    }
}
