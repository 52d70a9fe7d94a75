// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Custom error types for buffer-based ClockBound packet parsing and serialization.
//!
//! [`ParseError`] is designed to be `no_std`-compatible, using no heap allocation.
//! When the `std` feature is enabled, it also implements [`std::error::Error`] and
//! can be converted to [`std::io::Error`].

use core::fmt;

/// Errors that can occur during buffer-based packet parsing or serialization.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The buffer is too short for the expected data.
    BufferTooShort {
        /// Number of bytes needed.
        needed: usize,
        /// Number of bytes available.
        available: usize,
    },
    /// A message that must have an exact size had a different one.
    InvalidLength {
        /// Number of bytes the message must have.
        expected: usize,
        /// Number of bytes actually present.
        actual: usize,
    },
    /// A request carried a command type this side cannot interpret.
    UnknownCommand {
        /// The raw command type byte.
        code: u8,
    },
    /// An instant lies outside the range of the unsigned nanosecond encoding
    /// (before 1970-01-01T00:00:00Z or after 2554-07-21T23:34:33.709551615Z).
    TimeOutOfRange,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BufferTooShort { needed, available } => {
                write!(
                    f,
                    "buffer too short: needed {} bytes, got {}",
                    needed, available
                )
            }
            ParseError::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {} bytes, got {}", expected, actual)
            }
            ParseError::UnknownCommand { code } => write!(f, "unknown command type: {}", code),
            ParseError::TimeOutOfRange => {
                write!(f, "instant out of range for unsigned nanosecond encoding")
            }
        }
    }
}

#[cfg(feature = "std")]
impl From<ParseError> for std::io::Error {
    fn from(err: ParseError) -> std::io::Error {
        let kind = match &err {
            ParseError::BufferTooShort { .. } => std::io::ErrorKind::UnexpectedEof,
            ParseError::InvalidLength { .. } => std::io::ErrorKind::InvalidData,
            ParseError::UnknownCommand { .. } => std::io::ErrorKind::InvalidData,
            ParseError::TimeOutOfRange => std::io::ErrorKind::InvalidInput,
        };
        std::io::Error::new(kind, err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn test_display_buffer_too_short() {
        let err = ParseError::BufferTooShort {
            needed: 5,
            available: 2,
        };
        assert_eq!(err.to_string(), "buffer too short: needed 5 bytes, got 2");
    }

    #[test]
    fn test_display_invalid_length() {
        let err = ParseError::InvalidLength {
            expected: 20,
            actual: 21,
        };
        assert_eq!(err.to_string(), "invalid length: expected 20 bytes, got 21");
    }

    #[test]
    fn test_display_unknown_command() {
        let err = ParseError::UnknownCommand { code: 9 };
        assert_eq!(err.to_string(), "unknown command type: 9");
    }

    #[test]
    fn test_into_io_error() {
        let cases = [
            (
                ParseError::BufferTooShort {
                    needed: 20,
                    available: 0,
                },
                std::io::ErrorKind::UnexpectedEof,
            ),
            (
                ParseError::InvalidLength {
                    expected: 20,
                    actual: 4,
                },
                std::io::ErrorKind::InvalidData,
            ),
            (ParseError::TimeOutOfRange, std::io::ErrorKind::InvalidInput),
        ];
        for (parse_err, kind) in cases {
            let io_err: std::io::Error = parse_err.into();
            assert_eq!(io_err.kind(), kind);
        }
    }

    #[test]
    fn test_parse_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::TimeOutOfRange);
        assert_eq!(
            err.to_string(),
            "instant out of range for unsigned nanosecond encoding"
        );
    }
}
