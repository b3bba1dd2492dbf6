//! Device trait definitions
//!
//! Sensor-level traits the navigation layer consumes, so controller logic is
//! tested against scripted readings instead of synthesized pulse trains.

use super::error::Result;
use super::rangefinder::DistanceReading;
use super::turret::ServoTarget;

/// A sensor that produces one fresh distance reading per call
///
/// Each call owns a full trigger-wait-read cycle; a reading is never reused
/// across calls.
pub trait RangeSensor {
    /// Trigger a measurement and return the reading
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::RangeTimeout` if no echo arrives within the
    /// bounded wait.
    fn distance(&mut self) -> Result<DistanceReading>;
}

/// An aimable sensor mount
pub trait TurretInterface {
    /// Rotate to `target` and block until the feedback confirms arrival
    ///
    /// # Errors
    ///
    /// Returns `DeviceError::ServoSettleTimeout` if the feedback never enters
    /// the target band within the bounded wait.
    fn rotate(&mut self, target: ServoTarget) -> Result<()>;
}

// ============================================================================
// Scripted mocks (host tests)
// ============================================================================

#[cfg(any(test, feature = "mock"))]
pub use mock::{ScriptedRange, TrackingTurret};

#[cfg(any(test, feature = "mock"))]
mod mock {
    use super::*;
    use crate::devices::error::DeviceError;

    /// Scripted range sensor
    ///
    /// Replays distance readings (or timeouts) in order; once exhausted every
    /// further call repeats the last entry.
    #[derive(Debug)]
    pub struct ScriptedRange {
        script: heapless::Deque<Result<DistanceReading>, 64>,
        held: Result<DistanceReading>,
    }

    impl ScriptedRange {
        /// Replay the given readings in inches
        pub fn inches(readings: &[u16]) -> Self {
            let mut script = heapless::Deque::new();
            let mut held = Err(DeviceError::RangeTimeout);
            for &inches in readings {
                let reading = Ok(DistanceReading::from_inches(inches));
                let _ = script.push_back(reading);
                held = reading;
            }
            Self { script, held }
        }

        /// A sensor that always times out
        pub fn timing_out() -> Self {
            Self {
                script: heapless::Deque::new(),
                held: Err(DeviceError::RangeTimeout),
            }
        }

        /// Append one timeout to the script
        pub fn push_timeout(&mut self) {
            let _ = self.script.push_back(Err(DeviceError::RangeTimeout));
        }

        /// Append one reading in inches to the script
        pub fn push_inches(&mut self, inches: u16) {
            let reading = Ok(DistanceReading::from_inches(inches));
            let _ = self.script.push_back(reading);
            self.held = reading;
        }
    }

    impl RangeSensor for ScriptedRange {
        fn distance(&mut self) -> Result<DistanceReading> {
            match self.script.pop_front() {
                Some(r) => r,
                None => self.held,
            }
        }
    }

    /// Turret mock that records every commanded bearing and always arrives
    #[derive(Debug)]
    pub struct TrackingTurret {
        history: heapless::Vec<ServoTarget, 64>,
        fail: bool,
    }

    impl TrackingTurret {
        pub fn new() -> Self {
            Self {
                history: heapless::Vec::new(),
                fail: false,
            }
        }

        /// A turret whose servo is stuck: every rotate times out
        pub fn stuck() -> Self {
            Self {
                history: heapless::Vec::new(),
                fail: true,
            }
        }

        /// Bearings commanded so far, oldest first
        pub fn history(&self) -> &[ServoTarget] {
            &self.history
        }

        /// The bearing the turret currently points at
        pub fn current(&self) -> Option<ServoTarget> {
            self.history.last().copied()
        }
    }

    impl Default for TrackingTurret {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TurretInterface for TrackingTurret {
        fn rotate(&mut self, target: ServoTarget) -> Result<()> {
            if self.fail {
                return Err(DeviceError::ServoSettleTimeout);
            }
            let _ = self.history.push(target);
            Ok(())
        }
    }
}
