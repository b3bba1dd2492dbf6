//! IR frame decoder
//!
//! Pure state machine over measured pulse widths. The remote sends one long
//! start pulse, then 32 data bits encoded in the width of each high
//! interval: wider than the bit-one threshold is a `1`, otherwise `0`,
//! MSB first. The start pulse is discarded and does not count toward the
//! payload; a frame completes on exactly the 32nd data bit.
//!
//! The decoder runs in cooperative context and is fed samples the interrupt
//! side published; it never touches hardware.

use crate::core::config::IrTimingConfig;
use crate::platform::{PulseLevel, PulseSample};

/// One complete 32-bit frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IrFrame {
    /// The accumulated 32-bit code
    pub code: u32,
}

/// Incremental frame decoder
#[derive(Debug)]
pub struct IrFrameDecoder {
    config: IrTimingConfig,
    code: u32,
    bits: u8,
    in_frame: bool,
}

impl IrFrameDecoder {
    /// Create a decoder with default timing
    pub fn new() -> Self {
        Self::with_config(IrTimingConfig::default())
    }

    /// Create a decoder with custom timing
    pub fn with_config(config: IrTimingConfig) -> Self {
        Self {
            config,
            code: 0,
            bits: 0,
            in_frame: false,
        }
    }

    /// Feed one measured pulse; returns a frame when the 32nd bit lands
    ///
    /// Low intervals never carry data. A start-width pulse restarts the
    /// accumulator whether or not a frame was in progress, so a retransmit
    /// after a dropped edge resynchronizes cleanly. Samples outside a frame
    /// are ignored, so trailing bounce after the 32nd bit cannot bleed into
    /// the next frame.
    pub fn feed(&mut self, sample: PulseSample) -> Option<IrFrame> {
        if sample.level != PulseLevel::High {
            return None;
        }

        if sample.ticks > self.config.start_pulse_ticks {
            // Start pulse: discarded, does not count toward the payload
            self.code = 0;
            self.bits = 0;
            self.in_frame = true;
            return None;
        }

        if !self.in_frame {
            return None;
        }

        let bit = u32::from(sample.ticks > self.config.bit_one_ticks);
        self.code = (self.code << 1) | bit;
        self.bits += 1;

        if self.bits == self.config.frame_bits {
            self.in_frame = false;
            return Some(IrFrame { code: self.code });
        }
        None
    }

    /// Number of data bits accumulated in the frame in progress
    pub fn bits_pending(&self) -> u8 {
        if self.in_frame {
            self.bits
        } else {
            0
        }
    }

    /// Discard any partial frame (called on the frame-window boundary)
    pub fn reset(&mut self) {
        self.code = 0;
        self.bits = 0;
        self.in_frame = false;
    }
}

impl Default for IrFrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn high(ticks: u16) -> PulseSample {
        PulseSample {
            ticks,
            level: PulseLevel::High,
        }
    }

    fn low(ticks: u16) -> PulseSample {
        PulseSample {
            ticks,
            level: PulseLevel::Low,
        }
    }

    /// Feed a full frame for `code`: start pulse, then 32 width-coded bits
    fn feed_code(dec: &mut IrFrameDecoder, code: u32) -> Option<IrFrame> {
        let mut out = dec.feed(high(2275));
        for i in (0..32).rev() {
            let ticks = if code & (1 << i) != 0 { 416 } else { 146 };
            out = dec.feed(high(ticks));
        }
        out
    }

    #[test]
    fn test_bit_threshold() {
        let mut dec = IrFrameDecoder::new();
        dec.feed(high(2275));

        // 400 ticks is a 1, 300 ticks is a 0
        dec.feed(high(400));
        dec.feed(high(300));
        assert_eq!(dec.bits_pending(), 2);
        assert_eq!(dec.code, 0b10);
    }

    #[test]
    fn test_full_frame_msb_first() {
        let mut dec = IrFrameDecoder::new();
        let frame = feed_code(&mut dec, 0x00FF_629D).unwrap();
        assert_eq!(frame.code, 0x00FF_629D);
    }

    #[test]
    fn test_frame_needs_exactly_32_bits() {
        let mut dec = IrFrameDecoder::new();
        dec.feed(high(2275));
        for _ in 0..31 {
            assert_eq!(dec.feed(high(146)), None);
        }
        // 31 bits: nothing yet; the 32nd completes the frame
        assert!(dec.feed(high(146)).is_some());
    }

    #[test]
    fn test_extra_edges_after_frame_are_ignored() {
        let mut dec = IrFrameDecoder::new();
        feed_code(&mut dec, 0x00FF_02FD).unwrap();

        // Trailing bounce after the frame completed
        assert_eq!(dec.feed(high(146)), None);
        assert_eq!(dec.bits_pending(), 0);
    }

    #[test]
    fn test_no_start_pulse_no_frame() {
        let mut dec = IrFrameDecoder::new();
        for _ in 0..40 {
            assert_eq!(dec.feed(high(416)), None);
        }
    }

    #[test]
    fn test_low_intervals_carry_no_data() {
        let mut dec = IrFrameDecoder::new();
        dec.feed(high(2275));
        dec.feed(low(1130));
        dec.feed(high(416));
        dec.feed(low(146));
        assert_eq!(dec.bits_pending(), 1);
    }

    #[test]
    fn test_window_reset_discards_partial_frame() {
        let mut dec = IrFrameDecoder::new();
        dec.feed(high(2275));
        dec.feed(high(416));
        dec.feed(high(416));
        dec.reset();

        // A fresh full frame decodes cleanly after the discard
        let frame = feed_code(&mut dec, 0x00FF_A25D).unwrap();
        assert_eq!(frame.code, 0x00FF_A25D);
    }

    #[test]
    fn test_start_pulse_resynchronizes() {
        let mut dec = IrFrameDecoder::new();
        dec.feed(high(2275));
        dec.feed(high(416));

        // Retransmit: a new start pulse restarts accumulation
        let frame = feed_code(&mut dec, 0x00FF_906F).unwrap();
        assert_eq!(frame.code, 0x00FF_906F);
    }
}
