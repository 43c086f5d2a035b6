//! Tracing subscriber setup.

use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Registry,
};

/// Initializes the global tracing subscriber. `RUST_LOG` overrides the
/// level chosen by `verbose`. Safe to call once per process.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    Registry::default()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
