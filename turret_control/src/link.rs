//! Serial link transport.
//!
//! Opens the controller's tty device read/write and configures it raw
//! via termios: no echo, no canonical line editing, and VMIN=0/VTIME=1
//! so a blocked read returns within ~100 ms. The command loop uses that
//! poll interval to check the shutdown flag between reads.

use std::fs::{File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::Path;

use nix::sys::termios::{
    self, BaudRate, ControlFlags, SetArg, SpecialCharacterIndices,
};
use thiserror::Error;
use tracing::info;

/// Serial link setup error.
#[derive(Debug, Error)]
pub enum LinkError {
    /// Device open or I/O failure.
    #[error("Serial device I/O error: {0}")]
    Io(#[from] io::Error),

    /// Terminal attribute configuration failure.
    #[error("Terminal configuration failed: {0}")]
    Termios(#[from] nix::Error),

    /// Baud rate with no termios constant.
    #[error("Unsupported baud rate: {0}")]
    UnsupportedBaud(u32),
}

/// A raw-mode serial device handle.
///
/// Reads poll at ~100 ms (VTIME) and return 0 bytes on expiry rather
/// than blocking indefinitely.
pub struct SerialLink {
    file: File,
}

impl SerialLink {
    /// Open `path` read/write and configure it raw at `baud`.
    pub fn open(path: &Path, baud: u32) -> Result<Self, LinkError> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        let mut tio = termios::tcgetattr(&file)?;
        termios::cfmakeraw(&mut tio);
        tio.control_flags |= ControlFlags::CREAD | ControlFlags::CLOCAL;
        tio.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        tio.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;
        termios::cfsetspeed(&mut tio, baud_rate(baud)?)?;
        termios::tcsetattr(&file, SetArg::TCSANOW, &tio)?;

        info!(device = %path.display(), baud, "serial link opened");
        Ok(Self { file })
    }

    /// Clone the handle, e.g. to hold separate read and write halves.
    pub fn try_clone(&self) -> io::Result<Self> {
        Ok(Self {
            file: self.file.try_clone()?,
        })
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Map a numeric baud rate onto its termios constant.
fn baud_rate(baud: u32) -> Result<BaudRate, LinkError> {
    match baud {
        9600 => Ok(BaudRate::B9600),
        19200 => Ok(BaudRate::B19200),
        38400 => Ok(BaudRate::B38400),
        57600 => Ok(BaudRate::B57600),
        115200 => Ok(BaudRate::B115200),
        other => Err(LinkError::UnsupportedBaud(other)),
    }
}
