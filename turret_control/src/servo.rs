//! Servo range validation and angle-to-pulse-width conversion.
//!
//! Out-of-range angles saturate to the nearest domain bound rather than
//! being rejected; the confirmation line downstream reports the clamped
//! value. The pulse mapping is a pure linear interpolation over the
//! compile-time calibration range and is recomputed on every dispatch.

use turret_common::consts::{ANGLE_MAX_DEG, ANGLE_MIN_DEG, PULSE_MAX_US, PULSE_MIN_US};

/// Saturate a raw commanded angle into the [0, 180] degree domain.
pub fn clamp_angle(raw: i32) -> u8 {
    raw.clamp(ANGLE_MIN_DEG as i32, ANGLE_MAX_DEG as i32) as u8
}

/// Map a clamped angle linearly onto the [600, 2400] µs pulse range.
///
/// Endpoints are exact: 0° → 600 µs, 180° → 2400 µs. Monotonic
/// non-decreasing over the whole domain.
pub fn angle_to_pulse(angle: u8) -> u16 {
    let offset = (angle - ANGLE_MIN_DEG) as u32;
    let span = (PULSE_MAX_US - PULSE_MIN_US) as u32;
    let domain = (ANGLE_MAX_DEG - ANGLE_MIN_DEG) as u32;

    (PULSE_MIN_US as u32 + offset * span / domain) as u16
}
