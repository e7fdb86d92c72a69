//! PWM driver trait and error types.
//!
//! This module defines:
//! - `PwmChannel` enum - The two fixed logical output channels
//! - `PwmDriver` trait - Interface for pluggable PWM backends
//! - `PwmError` enum - Error types for PWM operations
//! - `DriverFactory` type alias - Factory function type

use thiserror::Error;

/// The two fixed logical output channels.
///
/// Channel assignment matches the wire protocol: the X axis drives the
/// pan servo on channel 0, the Y axis drives the tilt servo on channel 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PwmChannel {
    /// Pan servo (X axis), channel 0.
    Pan,
    /// Tilt servo (Y axis), channel 1.
    Tilt,
}

impl PwmChannel {
    /// Number of output channels.
    pub const COUNT: usize = 2;

    /// Hardware channel index.
    pub const fn index(self) -> usize {
        match self {
            PwmChannel::Pan => 0,
            PwmChannel::Tilt => 1,
        }
    }
}

impl std::fmt::Display for PwmChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PwmChannel::Pan => write!(f, "pan"),
            PwmChannel::Tilt => write!(f, "tilt"),
        }
    }
}

/// Error types for PWM operations.
#[derive(Debug, Clone, Error)]
pub enum PwmError {
    /// Driver initialization failed
    #[error("Initialization failed: {0}")]
    InitFailed(String),

    /// Output write failed
    #[error("Output write failed: {0}")]
    WriteFailed(String),

    /// Driver not found
    #[error("Driver not found: {0}")]
    DriverNotFound(String),

    /// Driver shutdown failed
    #[error("Shutdown failed: {0}")]
    ShutdownFailed(String),
}

/// Factory function type for creating driver instances.
pub type DriverFactory = fn() -> Box<dyn PwmDriver>;

/// Trait defining the interface for PWM output drivers.
///
/// The controller treats the driver as a trusted sink: it issues
/// "set channel C to pulse width W microseconds" writes and nothing else.
///
/// # Lifecycle
///
/// 1. `init()` - Called once before the command loop starts
/// 2. `set_pulse_width()` - Called on every dispatched command
/// 3. `shutdown()` - Called when the controller is stopping
pub trait PwmDriver: Send {
    /// Returns the driver's unique identifier (e.g., "simulation").
    fn name(&self) -> &'static str;

    /// Returns the driver's semantic version.
    fn version(&self) -> &'static str;

    /// Initialize the driver.
    ///
    /// May block for hardware initialization; runs before the command loop.
    ///
    /// # Errors
    /// Returns `PwmError::InitFailed` if initialization cannot complete.
    fn init(&mut self) -> Result<(), PwmError>;

    /// Set `channel` to a pulse width of `micros` microseconds.
    ///
    /// # Errors
    /// Returns `PwmError::WriteFailed` if the output cannot be updated.
    fn set_pulse_width(&mut self, channel: PwmChannel, micros: u16) -> Result<(), PwmError>;

    /// Graceful shutdown of the driver.
    ///
    /// Should release hardware resources and complete within 1 second.
    fn shutdown(&mut self) -> Result<(), PwmError>;
}
