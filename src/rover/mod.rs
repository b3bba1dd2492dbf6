//! Rover control layer
//!
//! Control modes over the device drivers: manual IR teleop and autonomous
//! wall following, plus the startup scan that picks which wall to track.

pub mod mode;

pub use mode::{Mode, ModeEvent};

use crate::devices::error::Result;
use crate::devices::traits::{RangeSensor, TurretInterface};
use crate::devices::turret::ServoTarget;
use crate::platform::TimerInterface;

/// The wall the controller tracks for the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Full-deflection scan bearing toward the tracked wall
    pub fn scan_target(self) -> ServoTarget {
        match self {
            WallSide::Left => ServoTarget::FarLeft,
            WallSide::Right => ServoTarget::FarRight,
        }
    }
}

/// Scan both sides and pick the closer wall to track
///
/// Full-right scan first, then full-left, then re-center. The settle delay
/// between scans lets the first echo environment clear before the reading.
///
/// # Errors
///
/// Propagates turret and rangefinder failures; a timeout here means the
/// robot cannot establish a wall and should not start driving.
pub fn select_wall_side<R, U, T>(
    range: &mut R,
    turret: &mut U,
    timer: &mut T,
    scan_settle_ms: u16,
) -> Result<WallSide>
where
    R: RangeSensor,
    U: TurretInterface,
    T: TimerInterface,
{
    turret.rotate(ServoTarget::FarRight)?;
    timer.delay_ms(u32::from(scan_settle_ms))?;
    let right = range.distance()?;

    turret.rotate(ServoTarget::FarLeft)?;
    timer.delay_ms(u32::from(scan_settle_ms))?;
    let left = range.distance()?;

    turret.rotate(ServoTarget::Center)?;

    let side = if left.inches < right.inches {
        WallSide::Left
    } else {
        WallSide::Right
    };
    crate::log_info!(
        "wall scan: left {} in, right {} in",
        left.inches,
        right.inches
    );
    Ok(side)
}
