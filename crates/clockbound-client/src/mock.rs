// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! A protocol-level stand-in for clockboundd.
//!
//! [`MockDaemon`] binds a private datagram socket, records every request it receives and
//! answers each one with the same canned payload. Point a [`Client`](crate::Client) at
//! [`MockDaemon::local_path`] to exercise the client without a real daemon.
//!
//! ```
//! # fn main() -> std::io::Result<()> {
//! use clockbound_client::Client;
//! use clockbound_client::mock::MockDaemon;
//!
//! let daemon = MockDaemon::new(vec![1, 2, 0, 0, 1])?;
//! let mut client = Client::with_path(daemon.local_path())?;
//! assert!(client.before(std::time::SystemTime::UNIX_EPOCH)?.before);
//! assert_eq!(daemon.requests().next().map(|r| r.len()), Some(12));
//! client.close()?;
//! daemon.close()
//! # }
//! ```

use log::warn;

use crate::socket_path;
use std::fs;
use std::io;
use std::net::Shutdown;
use std::os::unix::fs::PermissionsExt;
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender, TrySendError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Number of recorded requests held before further copies are dropped.
pub const REQUEST_QUEUE_CAPACITY: usize = 8;

/// Permissions for the listening socket.
const DAEMON_SOCKET_MODE: u32 = 0o777;

/// How long one receive may block before the loop re-checks for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Requests longer than this are recorded truncated.
const RECV_BUF_SIZE: usize = 64;

/// A mock clockboundd serving one canned response.
///
/// The receive loop runs on its own thread until [`MockDaemon::close`] is called or the
/// daemon is dropped. Received requests are queued (capacity
/// [`REQUEST_QUEUE_CAPACITY`]); when the queue is full the copy is dropped with a warning,
/// but the reply is still sent.
#[derive(Debug)]
pub struct MockDaemon {
    local: PathBuf,
    socket: UnixDatagram,
    requests: Receiver<Vec<u8>>,
    closed: Arc<AtomicBool>,
    serve_thread: Option<JoinHandle<()>>,
}

impl MockDaemon {
    /// Start a mock daemon in the system temp directory that replies `response` to
    /// every request.
    pub fn new(response: impl Into<Vec<u8>>) -> io::Result<MockDaemon> {
        MockDaemon::in_dir(&std::env::temp_dir(), response)
    }

    /// Start a mock daemon whose socket lives in `dir`.
    pub fn in_dir(dir: &Path, response: impl Into<Vec<u8>>) -> io::Result<MockDaemon> {
        let local = socket_path::ephemeral_socket_path(dir)?;
        let socket = UnixDatagram::bind(&local)?;
        let prepared = prepare(&local, &socket).and_then(|()| socket.try_clone());
        let loop_socket = match prepared {
            Ok(s) => s,
            Err(e) => {
                let _ = fs::remove_file(&local);
                return Err(e);
            }
        };

        let (tx, rx) = mpsc::sync_channel(REQUEST_QUEUE_CAPACITY);
        let closed = Arc::new(AtomicBool::new(false));
        let response = response.into();
        let loop_closed = Arc::clone(&closed);
        let spawned = thread::Builder::new()
            .name("clockbound-mock-daemon".into())
            .spawn(move || serve(loop_socket, response, tx, loop_closed));
        let serve_thread = match spawned {
            Ok(handle) => handle,
            Err(e) => {
                let _ = fs::remove_file(&local);
                return Err(e);
            }
        };

        Ok(MockDaemon {
            local,
            socket,
            requests: rx,
            closed,
            serve_thread: Some(serve_thread),
        })
    }

    /// Path of the listening socket; pass it to [`Client::with_path`](crate::Client::with_path).
    pub fn local_path(&self) -> &Path {
        &self.local
    }

    /// The recorded raw requests, oldest first.
    ///
    /// The iterator blocks waiting for the next request and only ends once the receive
    /// loop has stopped.
    pub fn requests(&self) -> mpsc::Iter<'_, Vec<u8>> {
        self.requests.iter()
    }

    /// The next recorded request, or `None` if none arrives within `timeout`.
    pub fn recv_request_timeout(&self, timeout: Duration) -> Option<Vec<u8>> {
        match self.requests.recv_timeout(timeout) {
            Ok(request) => Some(request),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Stop the receive loop, close the socket and remove its path.
    ///
    /// All steps are attempted; the first error is returned.
    pub fn close(mut self) -> io::Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> io::Result<()> {
        let Some(handle) = self.serve_thread.take() else {
            return Ok(());
        };
        self.closed.store(true, Ordering::Release);
        // Wakes a receive that is blocked right now.
        let disconnected = match self.socket.shutdown(Shutdown::Both) {
            Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
            result => result,
        };
        if handle.join().is_err() {
            warn!("mock daemon: receive loop panicked");
        }
        let removed = fs::remove_file(&self.local);
        disconnected.and(removed)
    }
}

impl Drop for MockDaemon {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

fn prepare(local: &Path, socket: &UnixDatagram) -> io::Result<()> {
    fs::set_permissions(local, fs::Permissions::from_mode(DAEMON_SOCKET_MODE))?;
    socket.set_read_timeout(Some(POLL_INTERVAL))
}

fn serve(
    socket: UnixDatagram,
    response: Vec<u8>,
    requests: SyncSender<Vec<u8>>,
    closed: Arc<AtomicBool>,
) {
    let is_closed = || closed.load(Ordering::Acquire);
    let mut buf = [0u8; RECV_BUF_SIZE];
    loop {
        if is_closed() {
            return;
        }

        let (len, peer) = match socket.recv_from(&mut buf) {
            Ok(received) => received,
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted
                ) =>
            {
                continue;
            }
            Err(e) => {
                if is_closed() {
                    return;
                }
                warn!("mock daemon: recv failed: {e}");
                continue;
            }
        };
        if is_closed() {
            return;
        }

        match requests.try_send(buf[..len].to_vec()) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("mock daemon: request queue full, dropping recorded request");
            }
            // The daemon handle is gone; nobody can observe requests or stop us.
            Err(TrySendError::Disconnected(_)) => return,
        }

        let Some(peer_path) = peer.as_pathname() else {
            warn!("mock daemon: request from an unnamed socket, not replying");
            continue;
        };
        if let Err(e) = socket.send_to(&response, peer_path) {
            if is_closed() {
                return;
            }
            warn!("mock daemon: reply to {} failed: {e}", peer_path.display());
        }
    }
}
