//! Prelude module for common re-exports.
//!
//! # Usage
//!
//! ```rust
//! use turret_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Calibration Constants ──────────────────────────────────────────
pub use crate::consts::{
    ANGLE_CENTER_DEG, ANGLE_MAX_DEG, ANGLE_MIN_DEG, PULSE_MAX_US, PULSE_MIN_US,
};

// ─── PWM Driver ─────────────────────────────────────────────────────
pub use crate::pwm::{DriverFactory, PwmChannel, PwmDriver, PwmError};
