// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

//! Names for the private datagram endpoints that receive daemon replies.

use std::io;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::TryRngCore;
use rand::rngs::OsRng;

/// The prefix for paths of temporary unixgram sockets.
pub const SOCKET_NAME_PREFIX: &str = "clockboundc";

/// Number of random bytes in a socket name.
const NAME_ENTROPY_BYTES: usize = 16;

/// Generate a fresh socket path inside `dir`.
///
/// The file name is `clockboundc-<16 random bytes, base64url without padding>.sock`.
/// The randomness is read from the operating system on every call; collisions are
/// negligible and are not detected (a collision surfaces as `AddrInUse` on bind).
pub fn ephemeral_socket_path(dir: &Path) -> io::Result<PathBuf> {
    let mut buf = [0u8; NAME_ENTROPY_BYTES];
    OsRng.try_fill_bytes(&mut buf).map_err(io::Error::other)?;
    let name = format!(
        "{}-{}.sock",
        SOCKET_NAME_PREFIX,
        URL_SAFE_NO_PAD.encode(buf)
    );
    Ok(dir.join(name))
}

/// [`ephemeral_socket_path`] in the system temp directory.
pub fn temp_socket_path() -> io::Result<PathBuf> {
    ephemeral_socket_path(&std::env::temp_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_shape() {
        let path = ephemeral_socket_path(Path::new("/run/test")).unwrap();
        assert_eq!(path.parent(), Some(Path::new("/run/test")));
        let name = path.file_name().unwrap().to_str().unwrap();
        let encoded = name
            .strip_prefix("clockboundc-")
            .and_then(|rest| rest.strip_suffix(".sock"))
            .unwrap();
        // 16 bytes of base64 without padding.
        assert_eq!(encoded.len(), 22);
        assert!(
            encoded
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert_eq!(URL_SAFE_NO_PAD.decode(encoded).unwrap().len(), 16);
    }

    #[test]
    fn names_are_unique() {
        let a = temp_socket_path().unwrap();
        let b = temp_socket_path().unwrap();
        assert_ne!(a, b);
        assert!(a.starts_with(std::env::temp_dir()));
    }
}
