//! Core infrastructure
//!
//! This module contains the pieces every layer leans on: logging macros, the
//! shared-state synchronization abstraction, the interrupt-to-loop edge
//! mailbox, and the configuration structures that hold all tuning constants.

pub mod config;
pub mod logging;
pub mod mailbox;
pub mod traits;
