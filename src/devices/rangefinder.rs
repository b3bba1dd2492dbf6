//! Ultrasonic range finder
//!
//! Drives an HC-SR04-class sensor: a ~10 µs pulse on the trigger line, then
//! the echo line's high interval measured by the edge capture unit. The
//! echo wait is bounded; a disconnected sensor yields `RangeTimeout` instead
//! of hanging the control loop.
//!
//! The capture backend is interchangeable: the interrupt-capture unit used
//! here and a periodic auto-retrigger timer both satisfy
//! [`EdgeCaptureInterface`] and this driver's contract.

use crate::core::config::RangeConfig;
use crate::devices::error::{DeviceError, Result};
use crate::devices::traits::RangeSensor;
use crate::platform::{EdgeCaptureInterface, GpioInterface, PulseLevel, TimerInterface};

/// One distance measurement
///
/// `inches = ticks / 37` with the divisor from [`RangeConfig`]; unsigned
/// arithmetic, so a tick count below the divisor floors to 0 and a distance
/// is never negative. Valid only for the trigger cycle that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DistanceReading {
    /// Raw echo high-interval width in capture ticks
    pub ticks: u16,
    /// Converted distance in inches
    pub inches: u16,
}

impl DistanceReading {
    /// Convert a raw echo width using the given ticks-per-inch divisor
    pub fn from_ticks(ticks: u16, ticks_per_inch: u16) -> Self {
        Self {
            ticks,
            inches: ticks / ticks_per_inch,
        }
    }

    /// Build a reading from a known distance (test scripting)
    pub fn from_inches(inches: u16) -> Self {
        Self {
            ticks: inches.saturating_mul(37),
            inches,
        }
    }
}

/// Ultrasonic range finder over capture + trigger pin + timer
pub struct RangeFinder<C, G, T>
where
    C: EdgeCaptureInterface,
    G: GpioInterface,
    T: TimerInterface,
{
    capture: C,
    trigger: G,
    timer: T,
    config: RangeConfig,
}

impl<C, G, T> RangeFinder<C, G, T>
where
    C: EdgeCaptureInterface,
    G: GpioInterface,
    T: TimerInterface,
{
    /// Create a range finder with default timing
    pub fn new(capture: C, trigger: G, timer: T) -> Self {
        Self::with_config(capture, trigger, timer, RangeConfig::default())
    }

    /// Create a range finder with custom timing
    pub fn with_config(capture: C, trigger: G, timer: T, config: RangeConfig) -> Self {
        Self {
            capture,
            trigger,
            timer,
            config,
        }
    }

    /// Emit one trigger pulse
    ///
    /// # Errors
    ///
    /// Propagates platform errors from the trigger pin or timer.
    pub fn trigger(&mut self) -> Result<()> {
        self.trigger.set_high()?;
        self.timer.delay_us(self.config.trigger_pulse_us)?;
        self.trigger.set_low()?;
        Ok(())
    }

    /// Trigger and wait for the echo, bounded
    ///
    /// Owns the full cycle: stale captures are discarded before triggering,
    /// so a reading can never come from a previous ping.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::RangeTimeout` if no echo high interval is
    /// captured within the configured bound.
    pub fn measure(&mut self) -> Result<DistanceReading> {
        self.capture.restart()?;
        self.trigger()?;

        let deadline = self
            .timer
            .now_us()
            .saturating_add(u64::from(self.config.echo_timeout_ms) * 1000);

        loop {
            if let Some(sample) = self.capture.take_sample() {
                if sample.level == PulseLevel::High {
                    return Ok(DistanceReading::from_ticks(
                        sample.ticks,
                        self.config.ticks_per_inch,
                    ));
                }
                // Low interval: the gap before the echo burst, keep waiting
            }
            if self.timer.now_us() >= deadline {
                return Err(DeviceError::RangeTimeout);
            }
            self.timer.delay_us(self.config.poll_interval_us)?;
        }
    }
}

impl<C, G, T> RangeSensor for RangeFinder<C, G, T>
where
    C: EdgeCaptureInterface,
    G: GpioInterface,
    T: TimerInterface,
{
    fn distance(&mut self) -> Result<DistanceReading> {
        self.measure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::mock::{MockEdgeCapture, MockGpio, MockTimer};

    fn finder(capture: MockEdgeCapture) -> RangeFinder<MockEdgeCapture, MockGpio, MockTimer> {
        RangeFinder::new(capture, MockGpio::new_output(), MockTimer::new())
    }

    #[test]
    fn test_conversion_known_echo() {
        // 370 ticks at 37 ticks/inch is exactly 10 inches
        let reading = DistanceReading::from_ticks(370, 37);
        assert_eq!(reading.inches, 10);
    }

    #[test]
    fn test_conversion_floors_to_zero() {
        assert_eq!(DistanceReading::from_ticks(0, 37).inches, 0);
        assert_eq!(DistanceReading::from_ticks(36, 37).inches, 0);
        assert_eq!(DistanceReading::from_ticks(37, 37).inches, 1);
    }

    #[test]
    fn test_measure_reads_echo() {
        let mut capture = MockEdgeCapture::new();
        capture.push_high(370);

        let mut rf = finder(capture);
        let reading = rf.measure().unwrap();
        assert_eq!(reading.inches, 10);
        assert_eq!(reading.ticks, 370);
    }

    #[test]
    fn test_measure_skips_low_interval() {
        // The quiet gap before the echo burst must not be read as a distance
        let mut capture = MockEdgeCapture::new();
        capture.push_low(500);
        capture.push_high(74);

        let mut rf = finder(capture);
        assert_eq!(rf.measure().unwrap().inches, 2);
    }

    #[test]
    fn test_measure_times_out() {
        let mut rf = finder(MockEdgeCapture::new());
        assert_eq!(rf.measure().unwrap_err(), DeviceError::RangeTimeout);
    }

    #[test]
    fn test_measure_discards_stale_capture() {
        let mut capture = MockEdgeCapture::new();
        capture.push_high(370);
        let mut rf = finder(capture);

        rf.measure().unwrap();
        // Each measure restarts the capture before triggering
        assert_eq!(rf.capture.restarts(), 1);
        rf.measure().unwrap_err();
        assert_eq!(rf.capture.restarts(), 2);
    }

    #[test]
    fn test_trigger_pulses_pin() {
        let mut rf = finder(MockEdgeCapture::new());
        rf.trigger().unwrap();
        rf.trigger().unwrap();
        assert_eq!(rf.trigger.rising_writes(), 2);
        assert!(!rf.trigger.read());
    }
}
