//! Subscriber setup for the binary
//!
//! The subscriber is installed before settings are read so that settings
//! loading is itself logged. The level starts at `INFO` and is switched once
//! the configured level is known.

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

/// Handle for changing the active level after startup
pub type LevelHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` directives with `level` as the default
pub fn filter_for(level: Level) -> EnvFilter {
    EnvFilter::from_default_env().add_directive(level.into())
}

/// Build a subscriber writing to `make_writer`, starting at `INFO`
pub fn subscriber<W>(make_writer: W) -> (impl tracing::Subscriber + Send + Sync + 'static, LevelHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter_for(Level::INFO));
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(make_writer));
    (subscriber, handle)
}

/// Install the global subscriber on stderr so stdout carries only command output
pub fn init() -> LevelHandle {
    let (subscriber, handle) = subscriber(std::io::stderr);
    subscriber.init();
    handle
}

/// Switch the active level
pub fn set_level(handle: &LevelHandle, level: Level) -> Result<(), reload::Error> {
    handle.reload(filter_for(level))
}
