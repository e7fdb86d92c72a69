//! Turret Common Library
//!
//! This crate provides shared constants, configuration loading utilities,
//! and the PWM driver abstraction for the turret workspace crates.
//!
//! # Module Structure
//!
//! - [`config`] - Configuration loading traits and types
//! - [`consts`] - System-wide constants (angle domain, pulse calibration)
//! - [`pwm`] - PWM output channel identifiers and the driver trait
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use turret_common::prelude::*;
//! ```

pub mod config;
pub mod consts;
pub mod prelude;
pub mod pwm;
