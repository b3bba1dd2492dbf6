//! IR receiver
//!
//! Consumes pulse samples from the edge capture unit, reconstructs 32-bit
//! frames, and maps them to remote commands. Frames are single-fire: a
//! decoded command is returned exactly once per physical button press.

mod command;
mod decoder;

pub use command::{
    Command, CODE_BACKWARD, CODE_FORWARD, CODE_LEFT, CODE_MODE, CODE_RESET, CODE_RIGHT,
    CODE_SPEED_DOWN, CODE_SPEED_UP, CODE_STOP,
};
pub use decoder::{IrFrame, IrFrameDecoder};

use crate::core::config::IrTimingConfig;
use crate::devices::error::{DeviceError, Result};
use crate::platform::{EdgeCaptureInterface, TimerInterface};

/// IR receiver over an edge capture unit
pub struct IrReceiver<C, T>
where
    C: EdgeCaptureInterface,
    T: TimerInterface,
{
    capture: C,
    timer: T,
    decoder: IrFrameDecoder,
    config: IrTimingConfig,
}

impl<C, T> IrReceiver<C, T>
where
    C: EdgeCaptureInterface,
    T: TimerInterface,
{
    /// Create a receiver with default timing
    pub fn new(capture: C, timer: T) -> Self {
        Self::with_config(capture, timer, IrTimingConfig::default())
    }

    /// Create a receiver with custom timing
    pub fn with_config(capture: C, timer: T, config: IrTimingConfig) -> Self {
        Self {
            capture,
            timer,
            decoder: IrFrameDecoder::with_config(config),
            config,
        }
    }

    /// Drain pending captures and return a decoded command, if one completed
    ///
    /// Non-blocking. A window boundary with a frame still in progress is a
    /// recovered decode timeout: the partial frame is discarded and decoding
    /// resumes clean next window. Unknown codes are logged and swallowed.
    ///
    /// # Errors
    ///
    /// Propagates platform errors from the capture unit.
    pub fn poll_command(&mut self) -> Result<Option<Command>> {
        let mut decoded = None;

        loop {
            if self.capture.take_window() {
                let pending = self.decoder.bits_pending();
                if pending != 0 {
                    crate::log_debug!(
                        "frame window elapsed with {} bits pending, discarding",
                        pending
                    );
                    self.decoder.reset();
                }
                continue;
            }

            let Some(sample) = self.capture.take_sample() else {
                break;
            };

            if let Some(frame) = self.decoder.feed(sample) {
                match Command::from_code(frame.code) {
                    Ok(cmd) => decoded = Some(cmd),
                    Err(DeviceError::UnknownCommand { code }) => {
                        crate::log_warn!("ignoring unmapped IR code {}", code);
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(decoded)
    }

    /// Block (bounded) until a command decodes
    ///
    /// The cooperative replacement for the original busy-wait on the frame
    /// window flag.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::DecodeTimeout` if no complete command arrives
    /// within `timeout_ms`.
    pub fn wait_command(&mut self, timeout_ms: u32) -> Result<Command> {
        let deadline = self
            .timer
            .now_us()
            .saturating_add(u64::from(timeout_ms) * 1000);

        loop {
            if let Some(cmd) = self.poll_command()? {
                return Ok(cmd);
            }
            if self.timer.now_us() >= deadline {
                return Err(DeviceError::DecodeTimeout);
            }
            self.timer.delay_us(self.config.poll_interval_us)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockEdgeCapture, MockTimer};

    fn push_code(capture: &mut MockEdgeCapture, code: u32) {
        capture.push_high(2275);
        for i in (0..32).rev() {
            capture.push_high(if code & (1 << i) != 0 { 416 } else { 146 });
        }
    }

    fn receiver(capture: MockEdgeCapture) -> IrReceiver<MockEdgeCapture, MockTimer> {
        IrReceiver::new(capture, MockTimer::new())
    }

    #[test]
    fn test_poll_decodes_one_command() {
        let mut capture = MockEdgeCapture::new();
        push_code(&mut capture, CODE_FORWARD);

        let mut rx = receiver(capture);
        assert_eq!(rx.poll_command().unwrap(), Some(Command::Forward));
        // Single-fire: the frame was consumed with the read
        assert_eq!(rx.poll_command().unwrap(), None);
    }

    #[test]
    fn test_poll_discards_partial_frame_on_window() {
        let mut capture = MockEdgeCapture::new();
        capture.push_high(2275);
        capture.push_high(416);
        capture.push_high(146);
        capture.push_window();
        push_code(&mut capture, CODE_STOP);

        let mut rx = receiver(capture);
        assert_eq!(rx.poll_command().unwrap(), Some(Command::Stop));
    }

    #[test]
    fn test_poll_swallows_unknown_code() {
        let mut capture = MockEdgeCapture::new();
        push_code(&mut capture, 0x0000_1234);

        let mut rx = receiver(capture);
        assert_eq!(rx.poll_command().unwrap(), None);
    }

    #[test]
    fn test_wait_command_times_out() {
        let mut rx = receiver(MockEdgeCapture::new());
        assert_eq!(
            rx.wait_command(70).unwrap_err(),
            DeviceError::DecodeTimeout
        );
    }

    #[test]
    fn test_wait_command_returns_decoded() {
        let mut capture = MockEdgeCapture::new();
        push_code(&mut capture, CODE_SPEED_UP);

        let mut rx = receiver(capture);
        assert_eq!(rx.wait_command(70).unwrap(), Command::SpeedUp);
    }
}
