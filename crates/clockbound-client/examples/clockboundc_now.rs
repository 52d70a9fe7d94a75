//! Query clockboundd for the current time and its error bound.
//!
//! Usage: `cargo run --example clockboundc_now [SOCKET_PATH]`

use chrono::TimeZone;
use clockbound_client::unix_time::Instant;
use clockbound_client::{Client, DEFAULT_SOCKET_PATH};

fn utc(t: &Instant) -> String {
    match chrono::Utc.timestamp_opt(t.secs(), t.subsec_nanos() as _) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339_opts(chrono::SecondsFormat::Nanos, true),
        _ => format!("{t:?}"),
    }
}

fn run(path: &str) -> std::io::Result<()> {
    let mut client = Client::with_path(path)?;
    let now = client.now()?;

    if now.is_synchronized() {
        log::info!("Synchronized");
    } else {
        log::info!("Unsynchronized");
    }
    log::info!("Current: {}", utc(&now));
    log::info!("Earliest: {}", utc(&now.bound.earliest));
    log::info!("Latest: {}", utc(&now.bound.latest));
    log::info!("Range: {:?}", now.bound.width());

    client.close()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SOCKET_PATH.to_string());
    if let Err(e) = run(&path) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
