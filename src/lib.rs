#![cfg_attr(not(test), no_std)]

//! wallrunner - firmware core for a wall-following differential-drive robot
//!
//! This library provides the platform abstraction, sensor drivers, and
//! navigation logic for a two-wheeled robot that tracks a wall with a
//! servo-aimed ultrasonic rangefinder and takes remote commands from an
//! NEC-style IR receiver.
//!
//! Hardware register access lives behind the `platform` capability traits,
//! so every driver and the navigation state machine run unmodified against
//! the mock backend on a host.

// Platform abstraction layer (capability traits + mock backend)
pub mod platform;

// Core infrastructure (logging, shared state, mailbox, configuration)
pub mod core;

// Device drivers using platform abstraction
pub mod devices;

// Rover control modes (manual teleop, wall following)
pub mod rover;
