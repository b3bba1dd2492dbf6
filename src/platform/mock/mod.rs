//! Mock platform backend for testing
//!
//! Every capability trait gets an implementation that runs on a host with no
//! hardware: pins track state, the ADC and edge capture replay scripted
//! readings, and the timer advances simulated time on every delay.

mod adc;
mod capture;
mod gpio;
mod platform;
mod pwm;
mod timer;

pub use adc::MockAnalog;
pub use capture::{CaptureEvent, MockEdgeCapture};
pub use gpio::MockGpio;
pub use platform::MockPlatform;
pub use pwm::MockPwm;
pub use timer::MockTimer;
