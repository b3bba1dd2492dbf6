//! Edge capture interface trait
//!
//! Edge-to-edge pulse timing over one free-running counter. On each signal
//! edge the backend latches the counter value, resets the counter, and flips
//! detector polarity so the next interrupt fires on the opposite transition.
//! A periodic compare-match window detects "no edge within the expected gap"
//! and is used both to end an IR frame and to bound an ultrasonic echo wait.
//!
//! The interrupt side does nothing beyond latch, publish, and reconfigure;
//! consumers pull published samples through this trait from cooperative
//! context.

use crate::platform::Result;

/// Signal level a pulse interval was held at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseLevel {
    /// Interval ended by a falling edge (line was high)
    High,
    /// Interval ended by a rising edge (line was low)
    Low,
}

/// One measured edge-to-edge interval
///
/// Produced per edge interrupt, consumed immediately by a decoder. Tick rate
/// is the capture counter's configured rate; all thresholds in
/// [`crate::core::config`] are in these ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseSample {
    /// Duration of the interval in timer ticks
    pub ticks: u16,
    /// Level the line was held at for the interval
    pub level: PulseLevel,
}

/// Edge capture interface trait
///
/// # Safety Invariants
///
/// - At most one sample is latched at a time; an unconsumed sample is
///   overwritten by the next edge (latest wins)
/// - `take_sample` and `take_window` are consuming reads: the flag they
///   report is cleared atomically with the read
pub trait EdgeCaptureInterface {
    /// Take the most recently captured pulse, if one is pending.
    fn take_sample(&mut self) -> Option<PulseSample>;

    /// Take the window-boundary flag.
    ///
    /// Returns `true` at most once per elapsed frame window in which no edge
    /// arrived.
    fn take_window(&mut self) -> bool;

    /// Drop any latched sample and restart the window period.
    ///
    /// Called before a measurement cycle so a stale capture is never read as
    /// fresh.
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Capture` if the capture unit rejects the
    /// reconfiguration.
    fn restart(&mut self) -> Result<()>;
}
