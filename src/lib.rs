//! Shared library for the `fetch_data` and `crunch_data` binaries.
//!
//! `fetch_data` pulls three parallel sensor time series (air temperature,
//! barometric pressure, wind speed) for one day from the Lake Pend Oreille
//! data server and merges them into five-field text rows. `crunch_data`
//! reads those rows from stdin and summarizes each column.

pub mod endpoints;
pub mod fetch;
pub mod merge;
pub mod output;
pub mod parser;
pub mod record;
pub mod stats;

use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Installs the stderr tracing subscriber shared by both binaries.
///
/// Honors `RUST_LOG`, defaulting to `info`. Diagnostics go to stderr so
/// stdout stays reserved for program output.
pub fn init_tracing() {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    tracing_subscriber::registry().with(stderr_layer).init();
}
