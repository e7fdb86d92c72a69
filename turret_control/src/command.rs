//! Command line parsing.
//!
//! A valid command carries the marker `X:` followed by an integer and
//! the marker `Y:` followed by an integer. Parsing anchors on the first
//! occurrence of each marker; any other tokens on the line are ignored.
//! A line missing either marker is rejected outright.
//!
//! Value fields are read with [`leading_int`]: an optional `-` sign and
//! a leading digit run, bounded at the first non-digit. An empty digit
//! run yields 0 — the legacy controller's string-to-int behavior, kept
//! deliberately so senders that worked against it keep working. Range
//! clamping happens downstream in [`crate::servo`].

use thiserror::Error;

/// Marker introducing the X-axis value field.
const X_MARKER: &str = "X:";

/// Marker introducing the Y-axis value field.
const Y_MARKER: &str = "Y:";

/// Command parsing error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line is missing the `X:` or `Y:` marker.
    #[error("Invalid command format")]
    MissingMarker,
}

/// A parsed two-axis position command, raw (pre-clamp) values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionCommand {
    /// Raw X-axis angle in degrees, as sent.
    pub x_raw: i32,
    /// Raw Y-axis angle in degrees, as sent.
    pub y_raw: i32,
}

/// Parse a completed command line.
///
/// Leading/trailing whitespace is stripped before parsing. Both marker
/// value fields end at the first non-digit character; trailing garbage
/// after the digits is ignored.
///
/// # Errors
///
/// Returns [`CommandError::MissingMarker`] if either marker is absent.
pub fn parse_command(line: &str) -> Result<PositionCommand, CommandError> {
    let line = line.trim();

    let x_pos = line.find(X_MARKER).ok_or(CommandError::MissingMarker)?;
    let y_pos = line.find(Y_MARKER).ok_or(CommandError::MissingMarker)?;

    let x_raw = leading_int(&line[x_pos + X_MARKER.len()..]);
    let y_raw = leading_int(&line[y_pos + Y_MARKER.len()..]);

    Ok(PositionCommand { x_raw, y_raw })
}

/// Parse the leading integer of `s`: optional `-` sign, then a digit
/// run bounded at the first non-digit. An empty digit run yields 0.
///
/// Values beyond the `i32` range saturate; the angle clamp downstream
/// collapses them to a domain bound anyway.
fn leading_int(s: &str) -> i32 {
    let bytes = s.as_bytes();
    let (negative, digits) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        _ => (false, bytes),
    };

    let mut value: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            break;
        }
        value = value
            .saturating_mul(10)
            .saturating_add((b - b'0') as i64);
    }
    if negative {
        value = -value;
    }

    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
