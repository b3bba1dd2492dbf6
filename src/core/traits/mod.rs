//! Core trait definitions

pub mod sync;

pub use sync::{MockState, SharedState};

#[cfg(feature = "embassy")]
pub use sync::EmbassyState;
