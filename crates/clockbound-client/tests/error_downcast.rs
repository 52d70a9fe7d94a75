// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Tests for error type downcasting through the io::Error boundary.

use std::io;

use clockbound_client::error::{ClockBoundError, ParseError, ProtocolError};

fn downcast(io_err: &io::Error) -> &ClockBoundError {
    io_err
        .get_ref()
        .unwrap()
        .downcast_ref::<ClockBoundError>()
        .unwrap()
}

#[test]
fn test_invalid_length_roundtrip() {
    let err = ClockBoundError::from(ParseError::InvalidLength {
        expected: 20,
        actual: 5,
    });
    let io_err: io::Error = err.into();

    assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    assert!(matches!(
        downcast(&io_err),
        ClockBoundError::Protocol(ProtocolError::InvalidResponseLength {
            expected: 20,
            received: 5
        })
    ));
}

#[test]
fn test_response_too_short_roundtrip() {
    let err = ClockBoundError::Protocol(ProtocolError::ResponseTooShort {
        expected: 5,
        received: 4,
    });
    let io_err: io::Error = err.into();

    assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    assert_eq!(
        io_err.to_string(),
        "clockboundc: response too short: 4 bytes (expected at least 5)"
    );
    assert!(matches!(
        downcast(&io_err),
        ClockBoundError::Protocol(ProtocolError::ResponseTooShort { .. })
    ));
}

#[test]
fn test_time_out_of_range_roundtrip() {
    let io_err: io::Error = ClockBoundError::TimeOutOfRange.into();

    assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
    assert!(matches!(downcast(&io_err), ClockBoundError::TimeOutOfRange));
}

#[test]
fn test_unknown_command_becomes_other() {
    let err = ClockBoundError::from(ParseError::UnknownCommand { code: 9 });
    let io_err: io::Error = err.into();

    assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    assert!(matches!(
        downcast(&io_err),
        ClockBoundError::Protocol(ProtocolError::Other(_))
    ));
}

#[test]
fn test_io_error_is_not_wrapped() {
    let io_err: io::Error =
        ClockBoundError::Io(io::Error::from(io::ErrorKind::PermissionDenied)).into();

    assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    assert!(
        io_err
            .get_ref()
            .and_then(|inner| inner.downcast_ref::<ClockBoundError>())
            .is_none()
    );
}
