//! Wall Follow Mode
//!
//! The autonomous navigation state machine. The robot holds a target
//! distance from the tracked wall by briefly braking one wheel (differential
//! correction), pivots when the way ahead closes, rounds corners where the
//! wall falls away, and after enough corners drops into a tighter-tolerance
//! follow for narrow passages.
//!
//! Every sensor read re-aims the turret first, so a distance is never taken
//! on a stale bearing. Sensor timeouts fail safe: stop, hold state, retry on
//! the next update.

use crate::core::config::WallFollowConfig;
use crate::devices::error::{DeviceError, Result};
use crate::devices::traits::{RangeSensor, TurretInterface};
use crate::devices::turret::ServoTarget;
use crate::devices::DriveInterface;
use crate::platform::TimerInterface;
use crate::rover::WallSide;

use super::{Mode, ModeEvent};

/// Navigation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FollowState {
    /// Normal corridor tracking with proportional corrections
    Corridor,
    /// Rounding a corner where the wall fell away
    CornerTurn,
    /// Narrow-passage tracking: tighter thresholds, fixed corrections
    TightFollow,
}

/// Wall-following mode over range sensor, turret, drive, and timer
pub struct WallFollowMode<'a, R, U, D, T>
where
    R: RangeSensor,
    U: TurretInterface,
    D: DriveInterface,
    T: TimerInterface,
{
    range: &'a mut R,
    turret: &'a mut U,
    drive: &'a mut D,
    timer: &'a mut T,
    config: WallFollowConfig,
    wall_side: WallSide,
    state: FollowState,
    prev_state: FollowState,
    turns: u8,
}

impl<'a, R, U, D, T> WallFollowMode<'a, R, U, D, T>
where
    R: RangeSensor,
    U: TurretInterface,
    D: DriveInterface,
    T: TimerInterface,
{
    /// Create a follow mode tracking the given wall
    pub fn new(
        range: &'a mut R,
        turret: &'a mut U,
        drive: &'a mut D,
        timer: &'a mut T,
        wall_side: WallSide,
    ) -> Self {
        Self::with_config(range, turret, drive, timer, wall_side, WallFollowConfig::default())
    }

    /// Create a follow mode with custom thresholds
    pub fn with_config(
        range: &'a mut R,
        turret: &'a mut U,
        drive: &'a mut D,
        timer: &'a mut T,
        wall_side: WallSide,
        config: WallFollowConfig,
    ) -> Self {
        Self {
            range,
            turret,
            drive,
            timer,
            config,
            wall_side,
            state: FollowState::Corridor,
            prev_state: FollowState::Corridor,
            turns: 0,
        }
    }

    /// Current navigation state
    pub fn state(&self) -> FollowState {
        self.state
    }

    /// State before the last transition
    pub fn previous_state(&self) -> FollowState {
        self.prev_state
    }

    /// Corners rounded since the last reset
    pub fn turn_count(&self) -> u8 {
        self.turns
    }

    /// The wall being tracked
    pub fn wall_side(&self) -> WallSide {
        self.wall_side
    }

    fn transition(&mut self, next: FollowState) {
        crate::log_info!("follow state: {:?} -> {:?}", self.state, next);
        self.prev_state = self.state;
        self.state = next;
    }

    /// Aim the turret and take a fresh reading; timeouts fail safe to `None`
    ///
    /// A `None` means "distance unknown": the caller must stop and hold
    /// state rather than act on anything stale.
    fn read_at(&mut self, target: ServoTarget) -> Result<Option<u16>> {
        match self.turret.rotate(target) {
            Ok(()) => {}
            Err(DeviceError::ServoSettleTimeout) => {
                crate::log_warn!("turret did not settle, stopping");
                self.drive.stop();
                return Ok(None);
            }
            Err(e) => return Err(e),
        }
        match self.range.distance() {
            Ok(reading) => Ok(Some(reading.inches)),
            Err(DeviceError::RangeTimeout) => {
                crate::log_warn!("distance unknown, stopping");
                self.drive.stop();
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Pivot in place, toward or away from the tracked wall
    fn pivot(&mut self, toward_wall: bool) -> Result<()> {
        match (self.wall_side, toward_wall) {
            (WallSide::Left, true) | (WallSide::Right, false) => self.drive.turn_left(),
            (WallSide::Left, false) | (WallSide::Right, true) => self.drive.turn_right(),
        }
        self.timer.delay_ms(u32::from(self.config.pivot_ms))?;
        self.drive.stop();
        Ok(())
    }

    /// Brake the wheel on the far side of the wall (veers away from it)
    fn brake_away(&mut self, ms: u16) {
        match self.wall_side {
            WallSide::Left => self.drive.brake_right(ms),
            WallSide::Right => self.drive.brake_left(ms),
        }
    }

    /// Brake the wheel nearest the wall (veers toward it)
    fn brake_toward(&mut self, ms: u16) {
        match self.wall_side {
            WallSide::Left => self.drive.brake_left(ms),
            WallSide::Right => self.drive.brake_right(ms),
        }
    }

    /// One corridor step: drive, then correct against the wall distance
    fn corridor_step(&mut self) -> Result<()> {
        let Some(front) = self.read_at(ServoTarget::Center)? else {
            return Ok(());
        };

        if front <= self.config.front_stop {
            // Way ahead closed: pivot away and start rounding the corner
            self.drive.stop();
            self.pivot(false)?;
            self.turns = self.turns.saturating_add(1);
            self.transition(FollowState::CornerTurn);
            return Ok(());
        }

        self.drive.forward();
        self.timer.delay_ms(u32::from(self.config.drive_interval_ms))?;

        let Some(wall) = self.read_at(self.wall_side.scan_target())? else {
            return Ok(());
        };

        if wall < self.config.wall_near {
            // Correction grows the deeper inside the near threshold we are
            let ms = self
                .config
                .corner_open
                .saturating_sub(wall)
                .saturating_mul(self.config.correction_scale_ms);
            self.brake_away(ms);
        } else if wall > self.config.wall_far {
            let ms = wall.saturating_mul(self.config.correction_scale_ms);
            self.brake_toward(ms);
        }
        Ok(())
    }

    /// One corner step: round the corner where the wall fell away
    fn corner_step(&mut self) -> Result<()> {
        if self.turns > self.config.corner_turn_limit {
            self.drive.stop();
            self.transition(FollowState::TightFollow);
            return Ok(());
        }

        let Some(side) = self.read_at(self.wall_side.scan_target())? else {
            return Ok(());
        };

        if side < self.config.corner_open {
            // Wall reacquired alongside: back to normal tracking
            self.transition(FollowState::Corridor);
            return Ok(());
        }

        // Clear the wall end, swing around it, then close back in
        self.drive.forward();
        self.timer.delay_ms(u32::from(self.config.drive_interval_ms))?;
        self.drive.stop();
        self.pivot(true)?;

        let mut cleared = false;
        for _ in 0..self.config.corner_burst_limit {
            let Some(front) = self.read_at(ServoTarget::Center)? else {
                return Ok(());
            };
            if front < self.config.corner_open {
                cleared = true;
                break;
            }
            self.drive.forward();
            self.timer.delay_ms(u32::from(self.config.drive_interval_ms))?;
            self.drive.stop();
        }

        if !cleared {
            crate::log_warn!("corner never closed, stopping");
            self.drive.stop();
            return Ok(());
        }

        self.turns = self.turns.saturating_add(1);
        Ok(())
    }

    /// One tight-follow step: corridor shape, tighter and fixed corrections
    fn tight_step(&mut self) -> Result<()> {
        let Some(front) = self.read_at(ServoTarget::Center)? else {
            return Ok(());
        };

        if front <= self.config.front_stop {
            self.drive.stop();
            self.pivot(false)?;
            self.turns = 0;
            self.transition(FollowState::Corridor);
            return Ok(());
        }

        self.drive.forward();
        self.timer.delay_ms(u32::from(self.config.drive_interval_ms))?;

        let Some(wall) = self.read_at(self.wall_side.scan_target())? else {
            return Ok(());
        };

        if wall < self.config.tight_near {
            self.brake_away(self.config.tight_correction_ms);
        } else if wall > self.config.tight_far {
            self.brake_toward(self.config.tight_correction_ms);
        }
        Ok(())
    }
}

impl<R, U, D, T> Mode for WallFollowMode<'_, R, U, D, T>
where
    R: RangeSensor,
    U: TurretInterface,
    D: DriveInterface,
    T: TimerInterface,
{
    fn enter(&mut self) -> Result<()> {
        crate::log_info!("entering wall follow, tracking {:?}", self.wall_side);
        self.state = FollowState::Corridor;
        self.prev_state = FollowState::Corridor;
        self.turns = 0;
        self.turret.rotate(self.wall_side.scan_target())?;
        Ok(())
    }

    fn update(&mut self) -> Result<ModeEvent> {
        match self.state {
            FollowState::Corridor => self.corridor_step()?,
            FollowState::CornerTurn => self.corner_step()?,
            FollowState::TightFollow => self.tight_step()?,
        }
        Ok(ModeEvent::None)
    }

    fn exit(&mut self) -> Result<()> {
        crate::log_info!("exiting wall follow");
        self.drive.stop();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "WallFollow"
    }
}
