//! Interrupt-to-loop edge mailbox
//!
//! The edge and compare-match interrupt handlers publish into a single-slot
//! mailbox; the cooperative loop consumes through the
//! [`EdgeCaptureInterface`] adapter. Both flags are consumed atomically with
//! their payload, which gives the single-fire semantics the decoders rely on:
//! a published sample or window boundary is observed exactly once.
//!
//! An unconsumed sample is overwritten by the next edge (latest wins); the
//! handlers never block and never decode.

use crate::core::traits::SharedState;
use crate::platform::{EdgeCaptureInterface, PulseSample, Result};

/// Shared capture slot: the only state that crosses the interrupt boundary.
#[derive(Debug, Default, Clone, Copy)]
pub struct CaptureSlot {
    sample: Option<PulseSample>,
    window: bool,
}

impl CaptureSlot {
    /// Empty slot, for static initialization.
    pub const fn new() -> Self {
        Self {
            sample: None,
            window: false,
        }
    }
}

/// Single-slot mailbox between interrupt handlers and the control loop.
///
/// On an embedded target this lives in a `static` backed by `EmbassyState`;
/// the edge ISR calls [`publish_sample`](Self::publish_sample) and the
/// compare-match ISR calls [`publish_window`](Self::publish_window). Tests
/// back it with `MockState`.
pub struct EdgeMailbox<S: SharedState<CaptureSlot>> {
    slot: S,
}

impl<S: SharedState<CaptureSlot>> EdgeMailbox<S> {
    /// Create a mailbox over the given shared slot
    pub const fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Publish a measured pulse. Interrupt context; overwrites any
    /// unconsumed sample.
    pub fn publish_sample(&self, sample: PulseSample) {
        self.slot.with_mut(|s| s.sample = Some(sample));
    }

    /// Publish a window boundary. Interrupt context.
    pub fn publish_window(&self) {
        self.slot.with_mut(|s| s.window = true);
    }

    /// Borrow a consumer implementing [`EdgeCaptureInterface`]
    pub fn consumer(&self) -> MailboxCapture<'_, S> {
        MailboxCapture { mailbox: self }
    }
}

/// Consumer-side adapter: pulls published samples from an [`EdgeMailbox`]
/// through the capture trait.
pub struct MailboxCapture<'a, S: SharedState<CaptureSlot>> {
    mailbox: &'a EdgeMailbox<S>,
}

impl<S: SharedState<CaptureSlot>> EdgeCaptureInterface for MailboxCapture<'_, S> {
    fn take_sample(&mut self) -> Option<PulseSample> {
        self.mailbox.slot.with_mut(|s| s.sample.take())
    }

    fn take_window(&mut self) -> bool {
        self.mailbox.slot.with_mut(|s| core::mem::take(&mut s.window))
    }

    fn restart(&mut self) -> Result<()> {
        self.mailbox.slot.with_mut(|s| {
            s.sample = None;
            s.window = false;
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockState;
    use crate::platform::PulseLevel;

    fn mailbox() -> EdgeMailbox<MockState<CaptureSlot>> {
        EdgeMailbox::new(MockState::new(CaptureSlot::new()))
    }

    #[test]
    fn test_sample_consumed_once() {
        let mb = mailbox();
        mb.publish_sample(PulseSample {
            ticks: 400,
            level: PulseLevel::High,
        });

        let mut cap = mb.consumer();
        assert_eq!(cap.take_sample().map(|s| s.ticks), Some(400));
        assert_eq!(cap.take_sample(), None);
    }

    #[test]
    fn test_latest_sample_wins() {
        let mb = mailbox();
        mb.publish_sample(PulseSample {
            ticks: 100,
            level: PulseLevel::High,
        });
        mb.publish_sample(PulseSample {
            ticks: 200,
            level: PulseLevel::High,
        });

        let mut cap = mb.consumer();
        assert_eq!(cap.take_sample().map(|s| s.ticks), Some(200));
    }

    #[test]
    fn test_window_flag_single_fire() {
        let mb = mailbox();
        mb.publish_window();

        let mut cap = mb.consumer();
        assert!(cap.take_window());
        assert!(!cap.take_window());
    }

    #[test]
    fn test_restart_clears_stale_state() {
        let mb = mailbox();
        mb.publish_sample(PulseSample {
            ticks: 370,
            level: PulseLevel::High,
        });
        mb.publish_window();

        let mut cap = mb.consumer();
        cap.restart().unwrap();
        assert_eq!(cap.take_sample(), None);
        assert!(!cap.take_window());
    }
}
