//! Turret controller: interprets completed lines as two-axis position
//! commands and acts on them.
//!
//! `TurretController` owns the two axis positions and the boxed PWM
//! driver; there is no module-level mutable state. Each line runs
//! through one synchronous pass — parse, clamp, map, dispatch — before
//! control returns to the caller (Idle → Parsing → Dispatch+Ack or
//! RejectAndReport → Idle).

use std::io::{Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, error, info, warn};
use turret_common::consts::ANGLE_CENTER_DEG;
use turret_common::pwm::{PwmChannel, PwmDriver, PwmError};

use crate::command::parse_command;
use crate::receiver::LineReceiver;
use crate::servo::{angle_to_pulse, clamp_angle};

/// Response line for a structurally invalid command.
pub const RESPONSE_INVALID: &str = "ERROR: Invalid command format";

/// Response line for a failed output write.
pub const RESPONSE_DRIVER_FAILURE: &str = "ERROR: Output driver failure";

/// Two-axis servo controller.
///
/// The stored positions always hold the last successfully parsed and
/// validated command (or the centered default before any command), and
/// the driver's channels reflect the mapping of those values as of the
/// last dispatch.
pub struct TurretController {
    /// Last commanded X-axis angle, degrees.
    x_deg: u8,
    /// Last commanded Y-axis angle, degrees.
    y_deg: u8,
    /// Output driver (trusted sink).
    driver: Box<dyn PwmDriver>,
}

impl TurretController {
    /// Create a controller, initialize the driver, and dispatch the
    /// centered position to both channels.
    ///
    /// # Errors
    /// Returns the driver's error if initialization or the initial
    /// centering dispatch fails.
    pub fn new(mut driver: Box<dyn PwmDriver>) -> Result<Self, PwmError> {
        driver.init()?;
        info!(
            driver = driver.name(),
            version = driver.version(),
            "PWM driver initialized"
        );

        let mut controller = Self {
            x_deg: ANGLE_CENTER_DEG,
            y_deg: ANGLE_CENTER_DEG,
            driver,
        };
        controller.dispatch(ANGLE_CENTER_DEG, ANGLE_CENTER_DEG)?;
        Ok(controller)
    }

    /// Last commanded (X, Y) angles in degrees.
    pub fn positions(&self) -> (u8, u8) {
        (self.x_deg, self.y_deg)
    }

    /// Process one completed command line and return the response line
    /// (without terminator).
    ///
    /// A malformed line (missing `X:` or `Y:` marker) changes nothing
    /// and yields the fixed error response. A valid line clamps both
    /// values into [0, 180], writes both channels, updates the stored
    /// positions, and reports the clamped values.
    pub fn process_line(&mut self, line: &str) -> String {
        let cmd = match parse_command(line) {
            Ok(cmd) => cmd,
            Err(e) => {
                debug!(line, %e, "command rejected");
                return RESPONSE_INVALID.to_string();
            }
        };

        let x = clamp_angle(cmd.x_raw);
        let y = clamp_angle(cmd.y_raw);

        // Positions update only after both channel writes succeed.
        if let Err(e) = self.dispatch(x, y) {
            error!(%e, "output dispatch failed");
            // The pan write may have landed before the tilt write
            // failed. Put any channel that took the new pulse back to
            // the stored positions, best effort.
            if let Err(e) = self.dispatch(self.x_deg, self.y_deg) {
                warn!(%e, "restore of stored positions failed");
            }
            return RESPONSE_DRIVER_FAILURE.to_string();
        }
        self.x_deg = x;
        self.y_deg = y;

        debug!(x, y, "position command applied");
        format!("OK X:{x} Y:{y}")
    }

    /// Write both channels: X to pan (channel 0), Y to tilt (channel 1).
    ///
    /// Writes are sequential, so a tilt failure leaves the pan channel
    /// already holding the new pulse; the caller restores the stored
    /// positions on the failure branch.
    fn dispatch(&mut self, x: u8, y: u8) -> Result<(), PwmError> {
        self.driver
            .set_pulse_width(PwmChannel::Pan, angle_to_pulse(x))?;
        self.driver
            .set_pulse_width(PwmChannel::Tilt, angle_to_pulse(y))?;
        Ok(())
    }

    /// Shut the driver down.
    pub fn shutdown(&mut self) -> Result<(), PwmError> {
        self.driver.shutdown()
    }
}

/// Run the synchronous command loop until `running` clears, or until
/// the reader reports end-of-input while `stop_on_idle` is set.
///
/// Writes the two-line startup banner, then polls the reader. Every
/// byte feeds the line receiver; each completed line is taken and
/// processed before the next byte is considered, so the receiver's
/// single-slot mailbox never overflows from this loop.
///
/// `stop_on_idle` distinguishes the two read-timeout semantics: a tty
/// configured with VTIME returns 0 on poll expiry and the loop must
/// keep going, while a plain stream (stdin, a file) returns 0 only at
/// EOF and the loop must end.
pub fn run_command_loop<R: Read, W: Write>(
    mut reader: R,
    mut writer: W,
    controller: &mut TurretController,
    running: &AtomicBool,
    stop_on_idle: bool,
) -> std::io::Result<()> {
    writer.write_all(b"Turret servo controller ready\n")?;
    writer.write_all(b"Send commands as X:<0-180> Y:<0-180>\n")?;
    writer.flush()?;

    let mut receiver = LineReceiver::new();
    let mut buf = [0u8; 64];

    while running.load(Ordering::SeqCst) {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            if stop_on_idle {
                break;
            }
            continue;
        }

        for &byte in &buf[..n] {
            receiver.on_byte(byte);
            if let Some(line) = receiver.take_line() {
                let response = controller.process_line(&line);
                writer.write_all(response.as_bytes())?;
                writer.write_all(b"\n")?;
                writer.flush()?;
            }
        }
    }

    Ok(())
}
