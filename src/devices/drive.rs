//! Motor actuator boundary
//!
//! The differential drive is an external collaborator: the H-bridge pin and
//! PWM register writes live behind this trait and are treated as
//! side-effecting, non-failing primitives. The navigation layer only ever
//! talks to `DriveInterface`.

/// Which side of the drive train
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorSide {
    Left,
    Right,
}

/// Differential drive primitives
///
/// `brake_left`/`brake_right` stall one side for a bounded duration and then
/// restore the prior pin state, which biases heading without a full turn.
pub trait DriveInterface {
    /// Drive both wheels forward
    fn forward(&mut self);

    /// Drive both wheels backward
    fn backward(&mut self);

    /// Pivot left in place
    fn turn_left(&mut self);

    /// Pivot right in place
    fn turn_right(&mut self);

    /// Stop both wheels
    fn stop(&mut self);

    /// Brake the left wheel for `ms`, then restore its prior state
    fn brake_left(&mut self, ms: u16);

    /// Brake the right wheel for `ms`, then restore its prior state
    fn brake_right(&mut self, ms: u16);

    /// Set one side's PWM duty (0..=255)
    fn set_speed(&mut self, side: MotorSide, duty: u8);

    /// Current PWM duty for one side
    fn speed(&self, side: MotorSide) -> u8;
}

// ============================================================================
// Recording mock (host tests)
// ============================================================================

/// One recorded drive call
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveCall {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
    Stop,
    BrakeLeft(u16),
    BrakeRight(u16),
    SetSpeed(MotorSide, u8),
}

/// Overall motion state implied by the last direction call
#[cfg(any(test, feature = "mock"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Stopped,
    Forward,
    Backward,
    TurningLeft,
    TurningRight,
}

/// Recording drive for test verification
///
/// Records every call in order and tracks the implied motion state and per
/// side duty.
#[cfg(any(test, feature = "mock"))]
#[derive(Debug)]
pub struct RecordingDrive {
    calls: heapless::Vec<DriveCall, 128>,
    motion: Motion,
    left_duty: u8,
    right_duty: u8,
}

#[cfg(any(test, feature = "mock"))]
impl RecordingDrive {
    /// Create a stopped drive with the given initial duty on both sides
    pub fn new(duty: u8) -> Self {
        Self {
            calls: heapless::Vec::new(),
            motion: Motion::Stopped,
            left_duty: duty,
            right_duty: duty,
        }
    }

    /// All calls recorded so far, oldest first
    pub fn calls(&self) -> &[DriveCall] {
        &self.calls
    }

    /// Motion state implied by the last direction call
    pub fn motion(&self) -> Motion {
        self.motion
    }

    /// Forget recorded calls (state and duty are kept)
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: DriveCall) {
        let _ = self.calls.push(call);
    }
}

#[cfg(any(test, feature = "mock"))]
impl DriveInterface for RecordingDrive {
    fn forward(&mut self) {
        self.motion = Motion::Forward;
        self.record(DriveCall::Forward);
    }

    fn backward(&mut self) {
        self.motion = Motion::Backward;
        self.record(DriveCall::Backward);
    }

    fn turn_left(&mut self) {
        self.motion = Motion::TurningLeft;
        self.record(DriveCall::TurnLeft);
    }

    fn turn_right(&mut self) {
        self.motion = Motion::TurningRight;
        self.record(DriveCall::TurnRight);
    }

    fn stop(&mut self) {
        self.motion = Motion::Stopped;
        self.record(DriveCall::Stop);
    }

    fn brake_left(&mut self, ms: u16) {
        self.record(DriveCall::BrakeLeft(ms));
    }

    fn brake_right(&mut self, ms: u16) {
        self.record(DriveCall::BrakeRight(ms));
    }

    fn set_speed(&mut self, side: MotorSide, duty: u8) {
        match side {
            MotorSide::Left => self.left_duty = duty,
            MotorSide::Right => self.right_duty = duty,
        }
        self.record(DriveCall::SetSpeed(side, duty));
    }

    fn speed(&self, side: MotorSide) -> u8 {
        match side {
            MotorSide::Left => self.left_duty,
            MotorSide::Right => self.right_duty,
        }
    }
}
