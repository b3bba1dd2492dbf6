//! Synchronized state abstraction traits for platform-agnostic state access.
//!
//! This module provides the `SharedState` trait that abstracts over different
//! synchronization mechanisms (critical-section Mutex on embedded targets,
//! RefCell for host tests) so state shared between interrupt and cooperative
//! context can be exercised without embedded dependencies.

/// Platform-agnostic synchronized state access.
///
/// - `EmbassyState<T>` for embedded targets using a critical-section Mutex
/// - `MockState<T>` for host testing using RefCell (single-threaded)
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    ///
    /// On embedded targets the closure runs under a disabled-interrupt
    /// critical section, so a multi-byte update is never observed half
    /// written from an interrupt handler.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

// ============================================================================
// Embassy Implementation
// ============================================================================

#[cfg(feature = "embassy")]
use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};

/// Critical-section synchronized state for embedded targets.
///
/// # Safety
///
/// The critical section ensures atomic access even in interrupt contexts,
/// making this safe to share between edge-interrupt handlers and the main
/// control loop.
#[cfg(feature = "embassy")]
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, core::cell::RefCell<T>>,
}

#[cfg(feature = "embassy")]
impl<T> EmbassyState<T> {
    /// Creates a new `EmbassyState` wrapping the given value.
    ///
    /// This is a const fn, allowing static initialization.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(core::cell::RefCell::new(value)),
        }
    }
}

#[cfg(feature = "embassy")]
impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}

// ============================================================================
// Mock Implementation (always available for testing)
// ============================================================================

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g. calling `with_mut` while
/// `with` is active). This indicates a bug in the test code.
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub const fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_state_read_write() {
        let state = MockState::new(42u32);
        assert_eq!(state.with(|v| *v), 42);

        state.with_mut(|v| *v += 1);
        assert_eq!(state.with(|v| *v), 43);
    }

    #[test]
    fn test_mock_state_struct() {
        struct Counter {
            value: u32,
        }

        let state = MockState::new(Counter { value: 0 });
        let next = state.with_mut(|c| {
            c.value += 1;
            c.value
        });
        assert_eq!(next, 1);
    }
}
