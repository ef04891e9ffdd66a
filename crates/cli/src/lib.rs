pub mod commands;

use std::io;

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const G2ADD_VERSION_MESSAGE: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Set up tracing on stderr; stdout is reserved for the selected component.
pub fn setup_tracing_with_log_level(level: Level) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = Registry::default()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}
