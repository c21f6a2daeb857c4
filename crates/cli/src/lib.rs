use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod commands;

/// Tracing setup shared by the binaries. Logs go to stderr so stdout stays
/// machine-readable.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
