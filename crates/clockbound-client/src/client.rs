// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Blocking ClockBound client.
//!
//! Each [`Client`] owns one private datagram socket, bound to a randomly named path and
//! connected to the daemon. Every call writes one request and blocks for exactly one reply;
//! there is no request identifier, so replies are matched purely by ordering. The methods
//! take `&mut self` so a single client cannot have two requests in flight.

use log::debug;

use crate::error::{ClockBoundError, ProtocolError};
use crate::protocol::{CompareResponse, FromBytes, Header, NowResponse, Request, ToBytes};
use crate::socket_path;
use crate::unix_time::{Instant, UnixNanos};
use std::fs;
use std::io;
use std::net::Shutdown;
use std::ops::Deref;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The default path for connecting to clockboundd.
pub const DEFAULT_SOCKET_PATH: &str = "/run/clockboundd/clockboundd.sock";

/// Permissions for the private socket. The daemon usually runs under a different
/// user and group and must be able to write its reply.
const CLIENT_SOCKET_MODE: u32 = 0o666;

/// Receive buffer size. Larger than any valid reply so oversized replies are detected
/// instead of silently truncated.
const RECV_BUF_SIZE: usize = 64;

/// A clock error bound: "true time" exists between `earliest` and `latest`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Bound {
    /// Earliest possible value of true time.
    pub earliest: Instant,
    /// Latest possible value of true time.
    pub latest: Instant,
}

impl Bound {
    /// The width of the bound, `latest - earliest`.
    ///
    /// The daemon guarantees `earliest <= latest`; an inverted bound yields zero.
    pub fn width(&self) -> Duration {
        self.latest
            .duration_since(&self.earliest)
            .unwrap_or_default()
    }
}

/// The current system time with a clock error bound.
///
/// This struct implements `Deref<Target = Instant>`, so the midpoint can be used
/// directly (e.g., `now.secs()`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Now {
    /// The current system time without the bound: the midpoint of `bound`,
    /// computed as `latest - (latest - earliest) / 2`.
    pub time: Instant,
    /// The header clockboundd returned.
    pub header: Header,
    /// The clock error bound.
    pub bound: Bound,
}

impl Now {
    /// Whether the daemon's upstream time source was synchronized.
    pub fn is_synchronized(&self) -> bool {
        !self.header.unsynchronized
    }
}

impl Deref for Now {
    type Target = Instant;
    fn deref(&self) -> &Self::Target {
        &self.time
    }
}

impl From<NowResponse> for Now {
    fn from(response: NowResponse) -> Now {
        Now {
            time: response.midpoint().into(),
            header: response.header,
            bound: Bound {
                earliest: response.earliest.into(),
                latest: response.latest.into(),
            },
        }
    }
}

/// The reply to a Before query.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Before {
    /// The header clockboundd returned.
    pub header: Header,
    /// `true` if the queried time happened before the earliest error bound of the
    /// current system time.
    pub before: bool,
}

/// The reply to an After query.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct After {
    /// The header clockboundd returned.
    pub header: Header,
    /// `true` if the queried time happened after the latest error bound of the
    /// current system time.
    pub after: bool,
}

/// Builder for [`Client`].
///
/// ```no_run
/// # fn main() -> std::io::Result<()> {
/// use std::time::Duration;
///
/// let mut client = clockbound_client::ClientBuilder::new()
///     .daemon_path("/run/clockboundd/clockboundd.sock")
///     .read_timeout(Duration::from_secs(1))
///     .build()?;
/// let now = client.now()?;
/// println!("{:?} ± {:?}", now.time, now.bound.width() / 2);
/// client.close()
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    daemon_path: PathBuf,
    socket_dir: PathBuf,
    read_timeout: Option<Duration>,
    write_timeout: Option<Duration>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        ClientBuilder {
            daemon_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            socket_dir: std::env::temp_dir(),
            read_timeout: None,
            write_timeout: None,
        }
    }
}

impl ClientBuilder {
    /// A builder that connects to [`DEFAULT_SOCKET_PATH`] and places the private
    /// socket in the system temp directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the daemon's socket.
    pub fn daemon_path(mut self, path: impl AsRef<Path>) -> Self {
        self.daemon_path = path.as_ref().to_path_buf();
        self
    }

    /// Directory in which the private socket is created.
    pub fn socket_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.socket_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Deadline for each receive. Without one a call blocks until the daemon answers.
    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Deadline for each send.
    pub fn write_timeout(mut self, timeout: Duration) -> Self {
        self.write_timeout = Some(timeout);
        self
    }

    /// Bind the private socket, connect it to the daemon and expose it to the daemon.
    ///
    /// If anything fails after the bind, the private socket file is removed before the
    /// error is returned.
    pub fn build(self) -> io::Result<Client> {
        let local = socket_path::ephemeral_socket_path(&self.socket_dir)?;
        let socket = UnixDatagram::bind(&local)?;
        debug!("bound {}", local.display());

        // Dropping `client` on an early return removes the socket file.
        let client = Client {
            local,
            socket,
            closed: false,
        };
        client.socket.connect(&self.daemon_path)?;
        debug!("connected to {}", self.daemon_path.display());
        fs::set_permissions(
            &client.local,
            fs::Permissions::from_mode(CLIENT_SOCKET_MODE),
        )?;
        client.socket.set_read_timeout(self.read_timeout)?;
        client.socket.set_write_timeout(self.write_timeout)?;
        Ok(client)
    }
}

/// A client of clockboundd.
///
/// Not safe for concurrent use: wrap it in a `Mutex` to share it between threads.
/// Dropping a client removes its private socket; use [`Client::close`] to observe
/// cleanup errors.
#[derive(Debug)]
pub struct Client {
    local: PathBuf,
    socket: UnixDatagram,
    closed: bool,
}

impl Client {
    /// A client connected to [`DEFAULT_SOCKET_PATH`].
    pub fn new() -> io::Result<Client> {
        ClientBuilder::new().build()
    }

    /// A client connected to the daemon socket at `path`.
    pub fn with_path(path: impl AsRef<Path>) -> io::Result<Client> {
        ClientBuilder::new().daemon_path(path).build()
    }

    /// Path of this client's private socket.
    pub fn local_path(&self) -> &Path {
        &self.local
    }

    /// Sets the receive deadline for subsequent calls; `None` blocks indefinitely.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.socket.set_read_timeout(timeout)
    }

    /// Sets the send deadline for subsequent calls; `None` blocks indefinitely.
    pub fn set_write_timeout(&self, timeout: Option<Duration>) -> io::Result<()> {
        self.socket.set_write_timeout(timeout)
    }

    /// Gets the current system time with its error bound.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if:
    /// - the request cannot be sent or no reply can be received
    /// - the reply is not exactly 20 bytes ([`ProtocolError::InvalidResponseLength`],
    ///   kind `InvalidData`)
    pub fn now(&mut self) -> io::Result<Now> {
        let mut buf = [0u8; RECV_BUF_SIZE];
        let received = self.round_trip(Request::Now, &mut buf)?;
        let response = NowResponse::decode_exact(&buf[..received]).map_err(ClockBoundError::from)?;
        Ok(response.into())
    }

    /// Returns whether `t` happened before the earliest error bound of the current
    /// system time.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if `t` cannot be encoded (kind `InvalidInput`), if sending or
    /// receiving fails, or if the reply is shorter than 5 bytes.
    pub fn before(&mut self, t: impl Into<Instant>) -> io::Result<Before> {
        let request = Request::Before(encode(t.into())?);
        let response = self.compare(request)?;
        Ok(Before {
            header: response.header,
            before: response.result,
        })
    }

    /// Returns whether `t` happened after the latest error bound of the current
    /// system time.
    ///
    /// # Errors
    ///
    /// Same as [`Client::before`].
    pub fn after(&mut self, t: impl Into<Instant>) -> io::Result<After> {
        let request = Request::After(encode(t.into())?);
        let response = self.compare(request)?;
        Ok(After {
            header: response.header,
            after: response.result,
        })
    }

    /// Disconnects the socket and removes its filesystem entry.
    ///
    /// Both steps are attempted; the first error is returned.
    pub fn close(mut self) -> io::Result<()> {
        self.closed = true;
        let disconnected = match self.socket.shutdown(Shutdown::Both) {
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            result => result,
        };
        let removed = fs::remove_file(&self.local);
        debug!("closed {}", self.local.display());
        disconnected.and(removed)
    }

    fn compare(&mut self, request: Request) -> io::Result<CompareResponse> {
        let mut buf = [0u8; RECV_BUF_SIZE];
        let received = self.round_trip(request, &mut buf)?;
        let (response, _) =
            CompareResponse::from_bytes(&buf[..received]).map_err(ClockBoundError::from)?;
        Ok(response)
    }

    /// Send `request` and receive one reply datagram into `buf`.
    fn round_trip(&mut self, request: Request, buf: &mut [u8]) -> io::Result<usize> {
        let len = request.to_bytes(buf)?;
        let sent = self.socket.send(&buf[..len])?;
        debug!("sent: {} bytes ({})", sent, request.command());
        if sent != len {
            return Err(ClockBoundError::Protocol(ProtocolError::Other(format!(
                "short send: {sent} of {len} bytes"
            )))
            .into());
        }
        let received = self.socket.recv(buf)?;
        debug!("recv: {} bytes", received);
        Ok(received)
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        if !self.closed {
            let _ = fs::remove_file(&self.local);
        }
    }
}

fn encode(t: Instant) -> Result<UnixNanos, ClockBoundError> {
    UnixNanos::try_from(t).map_err(ClockBoundError::from)
}
