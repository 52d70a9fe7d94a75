// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Custom error types for the ClockBound client.
//!
//! All public APIs return `io::Result<T>`. Internally, errors are constructed as
//! `ClockBoundError` variants and converted to `io::Error` automatically via
//! `From<ClockBoundError> for io::Error`.
//!
//! Users who want programmatic error matching can downcast via
//! `io::Error::get_ref()`:
//!
//! ```no_run
//! use clockbound_client::error::{ClockBoundError, ProtocolError};
//!
//! # fn main() -> std::io::Result<()> {
//! let mut client = clockbound_client::Client::new()?;
//! match client.now() {
//!     Ok(now) => println!("bound width: {:?}", now.bound.width()),
//!     Err(e) => {
//!         if let Some(ClockBoundError::Protocol(p)) = e.get_ref()
//!             .and_then(|inner| inner.downcast_ref::<ClockBoundError>())
//!         {
//!             eprintln!("daemon sent a malformed reply: {p}");
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

// Re-export proto error types.
pub use clockbound_proto::error::ParseError;

use std::fmt;
use std::io;

/// Errors that can occur during ClockBound client operations.
#[derive(Debug)]
pub enum ClockBoundError {
    /// The daemon's reply did not match the protocol.
    Protocol(ProtocolError),
    /// A query instant cannot be expressed in the unsigned nanosecond encoding.
    TimeOutOfRange,
    /// Underlying I/O error (socket bind, connect, send/recv, unlink, etc.).
    Io(io::Error),
}

/// Protocol validation errors for daemon replies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProtocolError {
    /// A Now reply was not exactly 20 bytes.
    InvalidResponseLength {
        /// Required number of bytes.
        expected: usize,
        /// Number of bytes received.
        received: usize,
    },
    /// A Before/After reply had fewer than 5 bytes.
    ResponseTooShort {
        /// Minimum number of bytes.
        expected: usize,
        /// Number of bytes received.
        received: usize,
    },
    /// Generic protocol error.
    Other(String),
}

// ── Display implementations ─────────────────────────────────────────

impl fmt::Display for ClockBoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockBoundError::Protocol(e) => write!(f, "clockboundc: {e}"),
            ClockBoundError::TimeOutOfRange => write!(
                f,
                "clockboundc: instant outside 1970-01-01T00:00:00Z..=2554-07-21T23:34:33.709551615Z"
            ),
            ClockBoundError::Io(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::InvalidResponseLength { expected, received } => {
                write!(
                    f,
                    "invalid response length: {received} (expected {expected})"
                )
            }
            ProtocolError::ResponseTooShort { expected, received } => {
                write!(
                    f,
                    "response too short: {received} bytes (expected at least {expected})"
                )
            }
            ProtocolError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

// ── Error trait implementations ─────────────────────────────────────

impl std::error::Error for ClockBoundError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClockBoundError::Io(e) => Some(e),
            ClockBoundError::Protocol(e) => Some(e),
            ClockBoundError::TimeOutOfRange => None,
        }
    }
}

impl std::error::Error for ProtocolError {}

// ── From conversions ────────────────────────────────────────────────

impl From<ClockBoundError> for io::Error {
    fn from(err: ClockBoundError) -> io::Error {
        let kind = match &err {
            ClockBoundError::Protocol(_) => io::ErrorKind::InvalidData,
            ClockBoundError::TimeOutOfRange => io::ErrorKind::InvalidInput,
            ClockBoundError::Io(e) => e.kind(),
        };
        // Preserve the original io::Error directly for the Io variant.
        if let ClockBoundError::Io(e) = err {
            return e;
        }
        io::Error::new(kind, err)
    }
}

impl From<io::Error> for ClockBoundError {
    fn from(err: io::Error) -> ClockBoundError {
        ClockBoundError::Io(err)
    }
}

impl From<ProtocolError> for ClockBoundError {
    fn from(err: ProtocolError) -> ClockBoundError {
        ClockBoundError::Protocol(err)
    }
}

impl From<ParseError> for ClockBoundError {
    fn from(err: ParseError) -> ClockBoundError {
        match err {
            ParseError::InvalidLength { expected, actual } => {
                ClockBoundError::Protocol(ProtocolError::InvalidResponseLength {
                    expected,
                    received: actual,
                })
            }
            ParseError::BufferTooShort { needed, available } => {
                ClockBoundError::Protocol(ProtocolError::ResponseTooShort {
                    expected: needed,
                    received: available,
                })
            }
            ParseError::TimeOutOfRange => ClockBoundError::TimeOutOfRange,
            other => ClockBoundError::Protocol(ProtocolError::Other(other.to_string())),
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────
