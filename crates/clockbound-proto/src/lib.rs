// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! ClockBound daemon wire protocol types.
//!
//! This crate provides the request and response layouts spoken by `clockboundd`
//! over its Unix datagram socket, together with the unsigned 64-bit nanosecond
//! timestamp encoding the daemon uses for every instant on the wire.
//!
//! All codecs are pure: nothing here performs I/O. The slice based
//! [`protocol::FromBytes`] / [`protocol::ToBytes`] traits work without `std`;
//! the reader/writer based [`protocol::ReadBytes`] / [`protocol::WriteBytes`]
//! traits require the `std` feature.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

/// Custom error types for buffer-based packet parsing and serialization.
pub mod error;

/// ClockBound protocol types and constants.
pub mod protocol;

/// Unix time conversion utilities for unsigned nanosecond timestamps.
pub mod unix_time;
