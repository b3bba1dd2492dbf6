//! Rover control modes
//!
//! Each control mode implements the `Mode` trait with enter/update/exit
//! lifecycle hooks. The supervisor loop runs the active mode's `update`
//! repeatedly and acts on the events it returns.
//!
//! ## Available Modes
//!
//! - **Manual**: IR remote teleop, no autonomous behavior
//! - **WallFollow**: autonomous wall tracking (corridor / corner / tight)

pub mod follow;
pub mod manual;

pub use follow::{FollowState, WallFollowMode};
pub use manual::ManualMode;

use crate::devices::error::Result;

/// Event surfaced by a mode's update step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeEvent {
    /// Nothing to report
    None,
    /// Operator asked to toggle manual / wall-follow
    SwitchMode,
    /// Operator asked for an intentional whole-controller restart
    ResetRequested,
}

/// Control mode trait
///
/// ## Lifecycle
///
/// 1. `enter()` - called once when the mode becomes active
/// 2. `update()` - called repeatedly while active; each call is one bounded
///    step (modes sequence themselves on blocking sensor reads, there is no
///    fixed tick)
/// 3. `exit()` - called once when leaving the mode; must leave the drive in
///    a safe state
pub trait Mode {
    /// Initialize mode (called once on mode entry)
    ///
    /// # Errors
    ///
    /// Returns an error if the mode cannot be entered (e.g. wall follow
    /// without a reachable wall).
    fn enter(&mut self) -> Result<()>;

    /// Run one control step
    ///
    /// # Errors
    ///
    /// Propagates device failures the mode could not absorb. Sensor timeouts
    /// inside a step fail safe (stop, hold state) and are not errors here.
    fn update(&mut self) -> Result<ModeEvent>;

    /// Cleanup mode (called once on mode exit)
    ///
    /// # Errors
    ///
    /// Propagates device failures; the drive must still be stopped.
    fn exit(&mut self) -> Result<()>;

    /// Mode name for logging
    fn name(&self) -> &'static str;
}
