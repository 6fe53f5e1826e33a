use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `-v` flags win over `STEMSHIFT_LOG`.
pub fn init(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env("STEMSHIFT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
