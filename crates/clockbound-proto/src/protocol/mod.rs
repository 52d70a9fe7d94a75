//! Types and constants of the `clockboundd` datagram protocol.
//!
//! Provides `ReadBytes` and `WriteBytes` implementations which extend the byteorder crate
//! `WriteBytesExt` and `ReadBytesExt` traits with the ability to read and write the protocol
//! messages respectively, plus allocation-free [`FromBytes`] / [`ToBytes`] slice codecs.
//!
//! Every message starts with a 4 byte [`Header`]. All multi-byte integers are big-endian.
//!
//! | Message | Bytes | Layout |
//! |---|---|---|
//! | Now request | 4 | version \| type=1 \| reserved \| reserved |
//! | Now response | 20 | version \| type \| unsync \| reserved \| earliest(8) \| latest(8) |
//! | Before/After request | 12 | version \| type=2/3 \| reserved \| reserved \| instant(8) |
//! | Before/After response | 5 | version \| type \| unsync \| reserved \| result(1) |

/// Protocol version sent in every request.
pub const VERSION: u8 = 1;

/// Size of a Now request.
pub const NOW_REQUEST_SIZE: usize = 4;

/// Size of a Before or After request.
pub const COMPARE_REQUEST_SIZE: usize = 12;

mod bytes;
#[cfg(feature = "std")]
mod io;
mod traits;
mod types;

pub use self::traits::*;
pub use self::types::*;
