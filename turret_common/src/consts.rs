//! System-wide constants for the turret workspace.
//!
//! Single source of truth for the servo calibration values and default
//! paths. Imported by all crates — no duplication permitted.
//!
//! The calibration values are compile-time constants by design: external
//! collaborators cannot change them at runtime.

/// Lower bound of the commandable angle domain, in degrees.
pub const ANGLE_MIN_DEG: u8 = 0;

/// Upper bound of the commandable angle domain, in degrees.
pub const ANGLE_MAX_DEG: u8 = 180;

/// Centered position, in degrees. Both axes start here.
pub const ANGLE_CENTER_DEG: u8 = 90;

/// Pulse width corresponding to `ANGLE_MIN_DEG`, in microseconds.
///
/// Matches the 0° extreme of a standard hobby servo's datasheet timing.
pub const PULSE_MIN_US: u16 = 600;

/// Pulse width corresponding to `ANGLE_MAX_DEG`, in microseconds.
pub const PULSE_MAX_US: u16 = 2400;

/// Default serial device path.
pub const DEFAULT_SERIAL_DEVICE: &str = "/dev/ttyACM0";

/// Default serial baud rate.
pub const DEFAULT_BAUD: u32 = 9600;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/turret/controller.toml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_are_consistent() {
        assert!(ANGLE_MIN_DEG < ANGLE_MAX_DEG);
        assert!(ANGLE_MIN_DEG <= ANGLE_CENTER_DEG && ANGLE_CENTER_DEG <= ANGLE_MAX_DEG);
        assert!(PULSE_MIN_US < PULSE_MAX_US);
        assert!(DEFAULT_BAUD > 0);
    }

    #[test]
    fn pulse_range_is_divisible_by_angle_domain() {
        // Integer mapping stays exact at the endpoints.
        let span = (PULSE_MAX_US - PULSE_MIN_US) as u32;
        assert_eq!(span % (ANGLE_MAX_DEG - ANGLE_MIN_DEG) as u32, 0);
    }
}
