//! Ask clockboundd whether an instant is definitely in the past or the future.
//!
//! Usage: `cargo run --example compare [OFFSET_MS]`
//!
//! The queried instant is the local clock plus `OFFSET_MS` milliseconds (may be
//! negative, default 0).

use std::time::Duration;

use clockbound_client::ClientBuilder;
use clockbound_client::unix_time::Instant;

fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let offset_ms: i64 = std::env::args()
        .nth(1)
        .map(|s| s.parse().unwrap_or(0))
        .unwrap_or(0);
    let local = Instant::now();
    let nanos = local.secs() as i128 * 1_000_000_000
        + local.subsec_nanos() as i128
        + offset_ms as i128 * 1_000_000;
    let queried = Instant::new(
        (nanos / 1_000_000_000) as i64,
        (nanos % 1_000_000_000) as i32,
    );

    let mut client = ClientBuilder::new()
        .read_timeout(Duration::from_secs(1))
        .build()?;
    let before = client.before(queried)?;
    let after = client.after(queried)?;
    log::info!("Queried: {queried:?}");
    log::info!("Before earliest bound: {}", before.before);
    log::info!("After latest bound: {}", after.after);
    if !before.before && !after.after {
        log::info!("Within the clock error bound; ordering is uncertain");
    }
    client.close()
}
