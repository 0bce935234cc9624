#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod csv;
pub mod domain;
pub mod journal;
pub mod query;
pub mod remote;
pub mod replay;
pub mod seed;
pub mod store;

/// Logs go to stderr so stdout stays a clean report. `RUST_LOG` overrides `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
