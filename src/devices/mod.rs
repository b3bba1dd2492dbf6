//! Device drivers
//!
//! Drivers written against the platform capability traits, so all of them
//! run against the mock backend on a host.
//!
//! ## Modules
//!
//! - `ir`: IR receiver, frame decoder, and command table
//! - `rangefinder`: ultrasonic distance sensor
//! - `turret`: servo-aimed sensor mount with potentiometer feedback
//! - `drive`: motor actuator boundary (trait + recording mock)
//! - `traits`: device trait definitions (RangeSensor, TurretInterface)

pub mod drive;
pub mod error;
pub mod ir;
pub mod rangefinder;
pub mod traits;
pub mod turret;

pub use drive::{DriveInterface, MotorSide};
#[cfg(any(test, feature = "mock"))]
pub use drive::{DriveCall, Motion, RecordingDrive};
#[cfg(any(test, feature = "mock"))]
pub use traits::{ScriptedRange, TrackingTurret};
pub use error::DeviceError;
pub use ir::{Command, IrFrameDecoder, IrReceiver};
pub use rangefinder::{DistanceReading, RangeFinder};
pub use traits::{RangeSensor, TurretInterface};
pub use turret::{SensorTurret, ServoTarget};
