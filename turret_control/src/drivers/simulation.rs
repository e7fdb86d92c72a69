//! Simulation driver implementation.
//!
//! The `SimulationPwm` driver implements the `PwmDriver` trait to provide
//! a software-emulated output sink for development and testing without
//! physical hardware. Every write is recorded in a shared trace that
//! tests (or a monitoring shell) can inspect.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};
use turret_common::pwm::{PwmChannel, PwmDriver, PwmError};

/// Shared record of the simulated output state.
///
/// Cloning is cheap; all clones observe the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct PulseTrace {
    inner: Arc<Mutex<TraceInner>>,
}

#[derive(Debug, Default)]
struct TraceInner {
    last_pulse_us: [Option<u16>; PwmChannel::COUNT],
    writes: u64,
}

impl PulseTrace {
    /// Last pulse width written to `channel`, if any.
    pub fn last_pulse(&self, channel: PwmChannel) -> Option<u16> {
        self.inner.lock().expect("trace lock poisoned").last_pulse_us[channel.index()]
    }

    /// Total number of channel writes since creation.
    pub fn write_count(&self) -> u64 {
        self.inner.lock().expect("trace lock poisoned").writes
    }

    fn record(&self, channel: PwmChannel, micros: u16) {
        let mut inner = self.inner.lock().expect("trace lock poisoned");
        inner.last_pulse_us[channel.index()] = Some(micros);
        inner.writes += 1;
    }
}

/// Simulation driver implementing the PwmDriver trait.
pub struct SimulationPwm {
    name: &'static str,
    version: &'static str,
    initialized: bool,
    trace: PulseTrace,
}

impl SimulationPwm {
    /// Create a new simulation driver instance.
    pub fn new() -> Self {
        Self {
            name: "simulation",
            version: env!("CARGO_PKG_VERSION"),
            initialized: false,
            trace: PulseTrace::default(),
        }
    }

    /// Handle onto the shared output trace.
    pub fn trace(&self) -> PulseTrace {
        self.trace.clone()
    }
}

impl Default for SimulationPwm {
    fn default() -> Self {
        Self::new()
    }
}

/// Factory function for the driver registry.
pub fn create_driver() -> Box<dyn PwmDriver> {
    Box::new(SimulationPwm::new())
}

impl PwmDriver for SimulationPwm {
    fn name(&self) -> &'static str {
        self.name
    }

    fn version(&self) -> &'static str {
        self.version
    }

    fn init(&mut self) -> Result<(), PwmError> {
        info!("Initializing simulation PWM driver");
        self.initialized = true;
        Ok(())
    }

    fn set_pulse_width(&mut self, channel: PwmChannel, micros: u16) -> Result<(), PwmError> {
        if !self.initialized {
            return Err(PwmError::WriteFailed(
                "simulation driver not initialized".to_string(),
            ));
        }
        self.trace.record(channel, micros);
        debug!(%channel, micros, "simulated pulse width set");
        Ok(())
    }

    fn shutdown(&mut self) -> Result<(), PwmError> {
        info!("Simulation PWM driver shut down");
        self.initialized = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes_per_channel() {
        let mut driver = SimulationPwm::new();
        let trace = driver.trace();
        driver.init().unwrap();

        driver.set_pulse_width(PwmChannel::Pan, 1500).unwrap();
        driver.set_pulse_width(PwmChannel::Tilt, 600).unwrap();
        driver.set_pulse_width(PwmChannel::Pan, 2400).unwrap();

        assert_eq!(trace.last_pulse(PwmChannel::Pan), Some(2400));
        assert_eq!(trace.last_pulse(PwmChannel::Tilt), Some(600));
        assert_eq!(trace.write_count(), 3);
    }

    #[test]
    fn write_before_init_fails() {
        let mut driver = SimulationPwm::new();
        let result = driver.set_pulse_width(PwmChannel::Pan, 1500);
        assert!(matches!(result, Err(PwmError::WriteFailed(_))));
        assert_eq!(driver.trace().write_count(), 0);
    }

    #[test]
    fn unwritten_channel_has_no_pulse() {
        let driver = SimulationPwm::new();
        assert_eq!(driver.trace().last_pulse(PwmChannel::Tilt), None);
    }
}
