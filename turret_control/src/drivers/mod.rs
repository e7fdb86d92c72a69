//! PWM driver implementations.
//!
//! This module contains all PWM driver implementations:
//!
//! - [`simulation`] - Software simulation driver for development and testing
//!
//! # Adding New Drivers
//!
//! 1. Create a new submodule under `drivers/`
//! 2. Implement the `PwmDriver` trait from `turret_common::pwm`
//! 3. Register the driver in `register_builtin_drivers()`
//! 4. Add export and documentation

pub mod simulation;

use crate::driver_registry::DriverRegistry;

/// Register all built-in drivers into `registry`.
///
/// Call once at startup before any drivers are requested.
pub fn register_builtin_drivers(registry: &mut DriverRegistry) {
    registry.register("simulation", simulation::create_driver);

    // Future drivers will be registered here:
    // registry.register("pca9685", pca9685::create_driver);
}
