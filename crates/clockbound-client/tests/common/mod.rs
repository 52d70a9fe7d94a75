// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers for integration tests.

// Integration test helpers are `pub` so each `tests/*.rs` file can import them
// via `mod common`, but not every file uses every helper.
#![allow(unreachable_pub, dead_code)]

use std::time::Duration;

/// How long a test waits for the mock daemon to record a request.
pub const REQUEST_WAIT: Duration = Duration::from_secs(5);

/// Raw Now reply with the given flag byte and bound.
pub fn now_response(flag: u8, earliest: u64, latest: u64) -> Vec<u8> {
    let mut buf = vec![1, 1, flag, 0];
    buf.extend_from_slice(&earliest.to_be_bytes());
    buf.extend_from_slice(&latest.to_be_bytes());
    buf
}

/// Raw Before (`command == 2`) or After (`command == 3`) reply.
pub fn compare_response(command: u8, flag: u8, result: u8) -> Vec<u8> {
    vec![1, command, flag, 0, result]
}

/// Returns `true` if the error means no daemon is listening on the socket, so a test
/// against a live daemon should be skipped.
pub fn is_daemon_missing_error(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::NotFound
            | std::io::ErrorKind::ConnectionRefused
            | std::io::ErrorKind::PermissionDenied
            | std::io::ErrorKind::WouldBlock
            | std::io::ErrorKind::TimedOut
    )
}
