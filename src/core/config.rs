//! Tuning configuration
//!
//! Every threshold, divisor, and duration the control path depends on lives
//! here in named structures, so retuning the robot never touches control
//! flow. Defaults are the values calibrated on the original hardware
//! (16 MHz clock, /64 prescaler on the capture counter).

/// IR pulse-train decoding constants
#[derive(Debug, Clone, Copy)]
pub struct IrTimingConfig {
    /// High interval longer than this is a `1` bit (ticks)
    pub bit_one_ticks: u16,
    /// High interval longer than this is the frame's start pulse (ticks)
    pub start_pulse_ticks: u16,
    /// Number of data bits in a frame
    pub frame_bits: u8,
    /// Frame window period: a gap this long ends a frame (ms)
    pub frame_window_ms: u16,
    /// Poll interval while waiting on a frame (µs)
    pub poll_interval_us: u32,
}

impl Default for IrTimingConfig {
    fn default() -> Self {
        Self {
            bit_one_ticks: 350,
            start_pulse_ticks: 1200,
            frame_bits: 32,
            frame_window_ms: 70,
            poll_interval_us: 200,
        }
    }
}

/// Ultrasonic ranging constants
#[derive(Debug, Clone, Copy)]
pub struct RangeConfig {
    /// Capture counter ticks per inch of distance
    pub ticks_per_inch: u16,
    /// Trigger pulse width (µs)
    pub trigger_pulse_us: u32,
    /// Echo must be captured within this bound (ms)
    pub echo_timeout_ms: u16,
    /// Poll interval while waiting on the echo (µs)
    pub poll_interval_us: u32,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            ticks_per_inch: 37,
            trigger_pulse_us: 10,
            echo_timeout_ms: 40,
            poll_interval_us: 50,
        }
    }
}

/// One turret stop: PWM duty plus the accepted potentiometer band
#[derive(Debug, Clone, Copy)]
pub struct ServoBand {
    /// Output compare value commanding this position
    pub duty: u8,
    /// Lowest accepted feedback reading (inclusive)
    pub band_lo: u16,
    /// Highest accepted feedback reading (inclusive)
    pub band_hi: u16,
}

/// Sensor turret constants
///
/// Bands were determined on the original hardware by trial and error.
#[derive(Debug, Clone, Copy)]
pub struct ServoConfig {
    pub far_right: ServoBand,
    pub near_right: ServoBand,
    pub center: ServoBand,
    pub near_left: ServoBand,
    pub far_left: ServoBand,
    /// Post-arrival settle delay (ms)
    pub settle_ms: u16,
    /// Feedback must enter the band within this bound (ms)
    pub settle_timeout_ms: u16,
    /// Poll interval while waiting on feedback (µs)
    pub poll_interval_us: u32,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            far_right: ServoBand {
                duty: 0,
                band_lo: 0,
                band_hi: 21,
            },
            near_right: ServoBand {
                duty: 14,
                band_lo: 157,
                band_hi: 167,
            },
            center: ServoBand {
                duty: 21,
                band_lo: 301,
                band_hi: 311,
            },
            near_left: ServoBand {
                duty: 28,
                band_lo: 444,
                band_hi: 454,
            },
            far_left: ServoBand {
                duty: 36,
                band_lo: 606,
                band_hi: 616,
            },
            settle_ms: 10,
            settle_timeout_ms: 500,
            poll_interval_us: 200,
        }
    }
}

/// Wall-following controller thresholds
///
/// Distances are in inches as reported by the rangefinder; durations in ms.
#[derive(Debug, Clone, Copy)]
pub struct WallFollowConfig {
    /// Front distance at or below this stops and pivots (corridor + tight)
    pub front_stop: u16,
    /// Corridor: side distance below this is too close to the wall
    pub wall_near: u16,
    /// Corridor: side distance above this is too far from the wall
    pub wall_far: u16,
    /// Tight follow: too-close threshold
    pub tight_near: u16,
    /// Tight follow: too-far threshold
    pub tight_far: u16,
    /// Side distance at or above this means the wall fell away at a corner
    pub corner_open: u16,
    /// Full corner cycles before dropping into tight follow
    pub corner_turn_limit: u8,
    /// Forward drive interval per controller step (ms)
    pub drive_interval_ms: u16,
    /// Pivot turn duration (ms)
    pub pivot_ms: u16,
    /// Corridor correction: ms of brake per inch of error
    pub correction_scale_ms: u16,
    /// Tight follow: fixed correction duration (ms)
    pub tight_correction_ms: u16,
    /// Bound on forward bursts while clearing a corner
    pub corner_burst_limit: u8,
    /// Settle delay between the two wall-side scans at startup (ms)
    pub scan_settle_ms: u16,
}

impl Default for WallFollowConfig {
    fn default() -> Self {
        Self {
            front_stop: 13,
            wall_near: 10,
            wall_far: 12,
            tight_near: 11,
            tight_far: 13,
            corner_open: 24,
            corner_turn_limit: 2,
            drive_interval_ms: 20,
            pivot_ms: 400,
            correction_scale_ms: 2,
            tight_correction_ms: 20,
            corner_burst_limit: 32,
            scan_settle_ms: 200,
        }
    }
}

/// Manual (IR teleop) constants
#[derive(Debug, Clone, Copy)]
pub struct TeleopConfig {
    /// Duty change per speed-up/speed-down press, saturating at 0/255
    pub speed_step: u8,
}

impl Default for TeleopConfig {
    fn default() -> Self {
        Self { speed_step: 20 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_calibration() {
        let ir = IrTimingConfig::default();
        assert_eq!(ir.bit_one_ticks, 350);
        assert_eq!(ir.start_pulse_ticks, 1200);
        assert_eq!(ir.frame_bits, 32);

        let range = RangeConfig::default();
        assert_eq!(range.ticks_per_inch, 37);

        let servo = ServoConfig::default();
        assert_eq!(servo.center.duty, 21);
        assert_eq!((servo.center.band_lo, servo.center.band_hi), (301, 311));
    }

    #[test]
    fn test_corridor_thresholds_are_ordered() {
        let cfg = WallFollowConfig::default();
        assert!(cfg.wall_near < cfg.wall_far);
        assert!(cfg.tight_near < cfg.tight_far);
        assert!(cfg.wall_far < cfg.corner_open);
    }
}
