use core::fmt;

use super::{COMPARE_REQUEST_SIZE, ConstPackedSizeBytes, NOW_REQUEST_SIZE, VERSION};
use crate::unix_time::UnixNanos;

/// An 8-bit code identifying the operation of a request, echoed in its response.
///
/// Codes this crate does not know about are carried as-is rather than rejected, so a
/// response from a newer daemon still decodes.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CommandType(pub u8);

impl CommandType {
    /// The daemon could not serve the request.
    pub const ERROR: CommandType = CommandType(0);
    /// Current time with its error bound.
    pub const NOW: CommandType = CommandType(1);
    /// Whether an instant is before the earliest bound of the current time.
    pub const BEFORE: CommandType = CommandType(2);
    /// Whether an instant is after the latest bound of the current time.
    pub const AFTER: CommandType = CommandType(3);

    /// Whether this is one of the codes defined by protocol version 1.
    pub fn is_known(&self) -> bool {
        self.0 <= CommandType::AFTER.0
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CommandType::ERROR => write!(f, "Error"),
            CommandType::NOW => write!(f, "Now"),
            CommandType::BEFORE => write!(f, "Before"),
            CommandType::AFTER => write!(f, "After"),
            CommandType(code) => write!(f, "Unknown({code})"),
        }
    }
}

/// The 4 byte header that starts every request and response.
///
/// ### Layout
///
/// ```ignore
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    Version    |     Type      |    Unsync     |   Reserved    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
///
/// In requests the third byte is reserved and always sent as zero. In responses any
/// non-zero value means the daemon's upstream time source is not synchronized. The
/// last byte is reserved in both directions and ignored on receive.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Header {
    /// Protocol version.
    pub version: u8,
    /// Command type of the request, echoed by the response.
    pub command: CommandType,
    /// `true` when the daemon reports that its upstream time source (e.g. chrony) is not
    /// synchronized. Bound values are still returned but should be treated as unreliable.
    pub unsynchronized: bool,
}

impl Header {
    /// The header of an outgoing request for `command`.
    pub fn request(command: CommandType) -> Header {
        Header {
            version: VERSION,
            command,
            unsynchronized: false,
        }
    }
}

/// A request sent by a client to the daemon.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Request {
    /// Ask for the current time and its error bound.
    Now,
    /// Ask whether the instant is before the earliest bound of the current time.
    Before(UnixNanos),
    /// Ask whether the instant is after the latest bound of the current time.
    After(UnixNanos),
}

impl Request {
    /// The command type byte for this request.
    pub fn command(&self) -> CommandType {
        match self {
            Request::Now => CommandType::NOW,
            Request::Before(_) => CommandType::BEFORE,
            Request::After(_) => CommandType::AFTER,
        }
    }

    /// The size of this request on the wire.
    pub fn packed_len(&self) -> usize {
        match self {
            Request::Now => NOW_REQUEST_SIZE,
            Request::Before(_) | Request::After(_) => COMPARE_REQUEST_SIZE,
        }
    }

    /// The queried instant of a Before or After request.
    pub fn instant(&self) -> Option<UnixNanos> {
        match *self {
            Request::Now => None,
            Request::Before(t) | Request::After(t) => Some(t),
        }
    }
}

/// The daemon's answer to a Now request.
///
/// ### Layout
///
/// ```ignore
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    Version    |     Type      |    Unsync     |   Reserved    |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                   Earliest (unsigned ns)                      +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// +                    Latest (unsigned ns)                       +
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct NowResponse {
    /// Response header.
    pub header: Header,
    /// Earliest possible value of true time.
    pub earliest: UnixNanos,
    /// Latest possible value of true time.
    pub latest: UnixNanos,
}

impl NowResponse {
    /// The midpoint of the bound, i.e. the current system time as seen by the daemon.
    pub fn midpoint(&self) -> UnixNanos {
        UnixNanos::midpoint(self.earliest, self.latest)
    }
}

/// The daemon's answer to a Before or After request.
///
/// Only the first 5 bytes are consulted; anything after the result byte is ignored.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct CompareResponse {
    /// Response header.
    pub header: Header,
    /// The boolean answer; any non-zero byte is `true`.
    pub result: bool,
}

// Size implementations.

impl ConstPackedSizeBytes for UnixNanos {
    const PACKED_SIZE_BYTES: usize = 8;
}

impl ConstPackedSizeBytes for Header {
    const PACKED_SIZE_BYTES: usize = 4;
}

impl ConstPackedSizeBytes for NowResponse {
    const PACKED_SIZE_BYTES: usize =
        Header::PACKED_SIZE_BYTES + UnixNanos::PACKED_SIZE_BYTES + UnixNanos::PACKED_SIZE_BYTES;
}

impl ConstPackedSizeBytes for CompareResponse {
    const PACKED_SIZE_BYTES: usize = Header::PACKED_SIZE_BYTES + 1;
}
