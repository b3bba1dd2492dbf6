//! Manual Mode
//!
//! IR remote teleop: decoded commands map one-to-one onto drive primitives,
//! with no autonomous behavior. Speed commands step both sides' duty by a
//! fixed amount per press, saturating at the 8-bit duty range.

use crate::core::config::TeleopConfig;
use crate::devices::error::Result;
use crate::devices::ir::{Command, IrReceiver};
use crate::devices::{DriveInterface, MotorSide};
use crate::platform::{EdgeCaptureInterface, TimerInterface};

use super::{Mode, ModeEvent};

/// Manual (IR teleop) mode
pub struct ManualMode<'a, C, T, D>
where
    C: EdgeCaptureInterface,
    T: TimerInterface,
    D: DriveInterface,
{
    receiver: &'a mut IrReceiver<C, T>,
    drive: &'a mut D,
    config: TeleopConfig,
}

impl<'a, C, T, D> ManualMode<'a, C, T, D>
where
    C: EdgeCaptureInterface,
    T: TimerInterface,
    D: DriveInterface,
{
    /// Create a manual mode over a receiver and drive
    pub fn new(receiver: &'a mut IrReceiver<C, T>, drive: &'a mut D) -> Self {
        Self {
            receiver,
            drive,
            config: TeleopConfig::default(),
        }
    }

    /// Override the teleop configuration
    pub fn with_config(mut self, config: TeleopConfig) -> Self {
        self.config = config;
        self
    }

    fn step_speed(&mut self, up: bool) {
        let step = self.config.speed_step;
        for side in [MotorSide::Left, MotorSide::Right] {
            let duty = self.drive.speed(side);
            let next = if up {
                duty.saturating_add(step)
            } else {
                duty.saturating_sub(step)
            };
            self.drive.set_speed(side, next);
        }
    }

    /// Apply one decoded command to the drive
    pub fn dispatch(&mut self, cmd: Command) -> ModeEvent {
        match cmd {
            Command::Forward => self.drive.forward(),
            Command::Backward => self.drive.backward(),
            Command::TurnLeft => self.drive.turn_left(),
            Command::TurnRight => self.drive.turn_right(),
            Command::Stop => self.drive.stop(),
            Command::SpeedUp => self.step_speed(true),
            Command::SpeedDown => self.step_speed(false),
            Command::SwitchMode => return ModeEvent::SwitchMode,
            Command::Reset => {
                // Deliberate, requested restart: stop first so the drive is
                // safe while the supervisor tears everything down
                self.drive.stop();
                return ModeEvent::ResetRequested;
            }
        }
        ModeEvent::None
    }
}

impl<C, T, D> Mode for ManualMode<'_, C, T, D>
where
    C: EdgeCaptureInterface,
    T: TimerInterface,
    D: DriveInterface,
{
    fn enter(&mut self) -> Result<()> {
        crate::log_info!("entering manual mode");
        Ok(())
    }

    fn update(&mut self) -> Result<ModeEvent> {
        match self.receiver.poll_command()? {
            Some(cmd) => Ok(self.dispatch(cmd)),
            None => Ok(ModeEvent::None),
        }
    }

    fn exit(&mut self) -> Result<()> {
        crate::log_info!("exiting manual mode");
        self.drive.stop();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Manual"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::devices::drive::{DriveCall, Motion, RecordingDrive};
    use crate::devices::ir::CODE_FORWARD;
    use crate::platform::mock::{MockEdgeCapture, MockTimer};

    fn push_code(capture: &mut MockEdgeCapture, code: u32) {
        capture.push_high(2275);
        for i in (0..32).rev() {
            capture.push_high(if code & (1 << i) != 0 { 416 } else { 146 });
        }
    }

    #[test]
    fn test_forward_code_invokes_exactly_one_drive_call() {
        let mut capture = MockEdgeCapture::new();
        push_code(&mut capture, CODE_FORWARD);
        let mut rx = IrReceiver::new(capture, MockTimer::new());
        let mut drive = RecordingDrive::new(200);

        let mut mode = ManualMode::new(&mut rx, &mut drive);
        assert_eq!(mode.update().unwrap(), ModeEvent::None);
        // One more poll with nothing pending: no further actuation
        assert_eq!(mode.update().unwrap(), ModeEvent::None);

        assert_eq!(drive.calls(), &[DriveCall::Forward]);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut rx = IrReceiver::new(MockEdgeCapture::new(), MockTimer::new());
        let mut drive = RecordingDrive::new(200);
        drive.forward();

        let mut mode = ManualMode::new(&mut rx, &mut drive);
        mode.dispatch(Command::Stop);
        let after_one = Motion::Stopped;
        mode.dispatch(Command::Stop);

        assert_eq!(drive.motion(), after_one);
    }

    #[test]
    fn test_speed_steps_saturate() {
        let mut rx = IrReceiver::new(MockEdgeCapture::new(), MockTimer::new());
        let mut drive = RecordingDrive::new(250);

        let mut mode = ManualMode::new(&mut rx, &mut drive);
        mode.dispatch(Command::SpeedUp);
        assert_eq!(drive.speed(MotorSide::Left), 255);
        assert_eq!(drive.speed(MotorSide::Right), 255);

        for _ in 0..20 {
            let mut mode = ManualMode::new(&mut rx, &mut drive);
            mode.dispatch(Command::SpeedDown);
        }
        assert_eq!(drive.speed(MotorSide::Left), 0);
    }

    #[test]
    fn test_mode_and_reset_surface_events() {
        let mut rx = IrReceiver::new(MockEdgeCapture::new(), MockTimer::new());
        let mut drive = RecordingDrive::new(200);
        drive.forward();

        let mut mode = ManualMode::new(&mut rx, &mut drive);
        assert_eq!(mode.dispatch(Command::SwitchMode), ModeEvent::SwitchMode);
        assert_eq!(mode.dispatch(Command::Reset), ModeEvent::ResetRequested);
        // Reset stops the drive before the supervisor restarts
        assert_eq!(drive.motion(), Motion::Stopped);
    }
}
