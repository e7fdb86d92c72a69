//! # Turret Control Library
//!
//! Serial pan/tilt servo controller. Receives newline-terminated
//! two-axis position commands (`X:<deg> Y:<deg>`), validates and clamps
//! them into the [0, 180] degree domain, converts each angle to a pulse
//! width over the fixed [600, 2400] µs calibration range, and dispatches
//! the result to a pluggable PWM driver.
//!
//! ## Architecture
//!
//! 1. **Line Receiver** — frames the raw byte stream into discrete
//!    command lines (single-slot mailbox)
//! 2. **Command Processor** — parses, clamps, maps, and dispatches a
//!    completed line, then emits a one-line text response
//! 3. **Driver layer** — `PwmDriver` implementations behind a factory
//!    registry; the controller treats the active driver as a trusted sink
//!
//! Each command is processed synchronously, start to finish, on a single
//! logical thread of control. No retries, no timeouts, no fatal errors:
//! every failure is surfaced as a one-line response to the sender.

pub mod command;
pub mod config;
pub mod controller;
pub mod driver_registry;
pub mod drivers;
pub mod link;
pub mod receiver;
pub mod servo;
