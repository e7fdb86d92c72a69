//! Driver registry for PWM drivers.
//!
//! Provides a `DriverRegistry` struct for registering and retrieving PWM
//! driver factories. This uses constructor-injection rather than global
//! state.

use std::collections::HashMap;
use turret_common::pwm::{DriverFactory, PwmDriver, PwmError};

/// Registry of available PWM drivers.
///
/// Constructed at startup, populated via `register()`, and passed to the
/// controller setup by value. No global state — testable in isolation.
pub struct DriverRegistry {
    factories: HashMap<&'static str, DriverFactory>,
}

impl DriverRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a driver factory.
    ///
    /// # Panics
    /// Panics if a driver with the same name is already registered.
    pub fn register(&mut self, name: &'static str, factory: DriverFactory) {
        if self.factories.contains_key(name) {
            panic!("Driver '{name}' is already registered");
        }
        self.factories.insert(name, factory);
    }

    /// Get a driver factory by name.
    pub fn get_factory(&self, name: &str) -> Option<DriverFactory> {
        self.factories.get(name).copied()
    }

    /// Create a driver instance by name.
    ///
    /// # Errors
    /// Returns `PwmError::DriverNotFound` if no driver with the given
    /// name is registered.
    pub fn create_driver(&self, name: &str) -> Result<Box<dyn PwmDriver>, PwmError> {
        let factory = self
            .get_factory(name)
            .ok_or_else(|| PwmError::DriverNotFound(name.to_string()))?;
        Ok(factory())
    }

}

impl Default for DriverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::simulation;

    #[test]
    fn create_registered_driver() {
        let mut registry = DriverRegistry::new();
        registry.register("simulation", simulation::create_driver);

        let driver = registry.create_driver("simulation").unwrap();
        assert_eq!(driver.name(), "simulation");
    }

    #[test]
    fn unknown_driver_is_an_error() {
        let registry = DriverRegistry::new();
        let result = registry.create_driver("ethercat");
        assert!(matches!(result, Err(PwmError::DriverNotFound(_))));
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn duplicate_registration_panics() {
        let mut registry = DriverRegistry::new();
        registry.register("simulation", simulation::create_driver);
        registry.register("simulation", simulation::create_driver);
    }

    #[test]
    fn factory_lookup_matches_registration() {
        let mut registry = DriverRegistry::new();
        registry.register("simulation", simulation::create_driver);
        assert!(registry.get_factory("simulation").is_some());
        assert!(registry.get_factory("pca9685").is_none());
    }
}
