// Copyright 2026 U.S. Federal Government (in countries where recognized)
// SPDX-License-Identifier: Apache-2.0

/*!
Blocking client for the ClockBound daemon (`clockboundd`).

The daemon answers queries over a Unix datagram socket with the current time and a
clock error bound: an interval `[earliest, latest]` guaranteed to contain true time.

# Example
Shows how to fetch the current time and its error bound.

```rust,no_run
extern crate chrono;
extern crate clockbound_client;

use chrono::TimeZone;

fn main() -> std::io::Result<()> {
    let mut client = clockbound_client::Client::new()?;
    let now = client.now()?;
    let time = chrono::Utc
        .timestamp_opt(now.secs(), now.subsec_nanos() as _)
        .unwrap();
    println!("{} (synchronized: {})", time, now.is_synchronized());
    println!("Range: {:?}", now.bound.width());

    let before = client.before(std::time::SystemTime::now())?;
    println!("Before: {}", before.before);
    client.close()
}
```

# Feature Flags

| Feature | Default | Description |
|---------|---------|-------------|
| `mock` | no | Export `mock::MockDaemon`, an in-process stand-in for `clockboundd`. |
*/

#![warn(missing_docs)]

// Re-export protocol types from clockbound_proto for convenience.
pub use clockbound_proto::{protocol, unix_time};

pub mod error;

pub mod socket_path;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Client, builder and reply types.
mod client;

pub use client::{After, Before, Bound, Client, ClientBuilder, DEFAULT_SOCKET_PATH, Now};
