//! Line receiver: converts an unbounded byte stream into discrete
//! command lines.
//!
//! The receiver is a single-slot mailbox. The producer (byte arrival)
//! appends into the buffer and marks it complete on the terminator; the
//! consumer takes the completed line, which clears both the buffer and
//! the flag, before control returns to the producer. Bytes arriving
//! while a completed line is still pending are dropped rather than
//! appended to the stale buffer.
//!
//! No validation happens at this layer — arbitrary bytes, including
//! non-ASCII, pass through. Invalid UTF-8 is replaced lossily when the
//! line is taken, so the parser always operates on `str`.

use tracing::debug;

/// Line terminator byte.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Accumulates bytes into a line buffer until a terminator is seen.
///
/// Single-producer, single-consumer, one line buffered at a time, no
/// backpressure signaling.
#[derive(Debug, Default)]
pub struct LineReceiver {
    buffer: Vec<u8>,
    complete: bool,
}

impl LineReceiver {
    /// Create an empty receiver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one received byte.
    ///
    /// A terminator marks the buffered line complete; any other byte is
    /// appended. While a completed line is pending consumption, incoming
    /// bytes are dropped.
    pub fn on_byte(&mut self, byte: u8) {
        if self.complete {
            debug!(byte, "line pending consumption, byte dropped");
            return;
        }
        if byte == LINE_TERMINATOR {
            self.complete = true;
        } else {
            self.buffer.push(byte);
        }
    }

    /// Whether a completed line is available.
    pub fn has_line(&self) -> bool {
        self.complete
    }

    /// Take the completed line, clearing the buffer and the flag.
    ///
    /// Returns `None` if no terminator has arrived yet.
    pub fn take_line(&mut self) -> Option<String> {
        if !self.complete {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        self.complete = false;
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(receiver: &mut LineReceiver, bytes: &[u8]) {
        for &b in bytes {
            receiver.on_byte(b);
        }
    }

    #[test]
    fn accumulates_until_terminator() {
        let mut rx = LineReceiver::new();
        feed(&mut rx, b"X:90 Y:45");
        assert!(!rx.has_line());
        assert_eq!(rx.take_line(), None);

        rx.on_byte(b'\n');
        assert!(rx.has_line());
        assert_eq!(rx.take_line().as_deref(), Some("X:90 Y:45"));
    }

    #[test]
    fn take_clears_buffer_and_flag() {
        let mut rx = LineReceiver::new();
        feed(&mut rx, b"first\n");
        assert_eq!(rx.take_line().as_deref(), Some("first"));
        assert!(!rx.has_line());

        feed(&mut rx, b"second\n");
        assert_eq!(rx.take_line().as_deref(), Some("second"));
    }

    #[test]
    fn empty_line_is_a_line() {
        let mut rx = LineReceiver::new();
        rx.on_byte(b'\n');
        assert_eq!(rx.take_line().as_deref(), Some(""));
    }

    #[test]
    fn bytes_after_pending_line_are_dropped() {
        let mut rx = LineReceiver::new();
        feed(&mut rx, b"kept\nlost");
        assert_eq!(rx.take_line().as_deref(), Some("kept"));
        // The dropped bytes must not leak into the next line.
        feed(&mut rx, b"next\n");
        assert_eq!(rx.take_line().as_deref(), Some("next"));
    }

    #[test]
    fn non_utf8_bytes_are_replaced_lossily() {
        let mut rx = LineReceiver::new();
        feed(&mut rx, &[0xFF, 0xFE, b'\n']);
        let line = rx.take_line().unwrap();
        assert!(!line.is_empty());
        assert!(!line.contains("X:"));
    }
}
