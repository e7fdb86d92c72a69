//! Controller TOML configuration.
//!
//! Transport and driver selection live here; the servo calibration
//! values deliberately do not (they are compile-time constants in
//! `turret_common::consts`).

use serde::Deserialize;
use turret_common::config::{ConfigError, SharedConfig};
use turret_common::consts::{DEFAULT_BAUD, DEFAULT_SERIAL_DEVICE};

/// Serial transport section.
///
/// # TOML Example
///
/// ```toml
/// [serial]
/// device = "/dev/ttyACM0"
/// baud = 9600
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct SerialConfig {
    /// Serial device path.
    #[serde(default = "default_device")]
    pub device: String,

    /// Baud rate.
    #[serde(default = "default_baud")]
    pub baud: u32,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            device: default_device(),
            baud: default_baud(),
        }
    }
}

fn default_device() -> String {
    DEFAULT_SERIAL_DEVICE.to_string()
}

fn default_baud() -> u32 {
    DEFAULT_BAUD
}

fn default_driver() -> String {
    "simulation".to_string()
}

/// Top-level controller configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ControllerConfig {
    /// Shared base configuration (log level, service name).
    pub shared: SharedConfig,

    /// Serial transport settings.
    #[serde(default)]
    pub serial: SerialConfig,

    /// PWM driver to instantiate.
    #[serde(default = "default_driver")]
    pub driver: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            shared: SharedConfig {
                log_level: Default::default(),
                service_name: "turret-controller".to_string(),
            },
            serial: SerialConfig::default(),
            driver: default_driver(),
        }
    }
}

impl ControllerConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::ValidationError` if the shared section is
    /// invalid or the driver name is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;
        if self.driver.is_empty() {
            return Err(ConfigError::ValidationError(
                "driver cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
