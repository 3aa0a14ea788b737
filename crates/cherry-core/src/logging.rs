use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the global tracing subscriber.
///
/// Logs are JSON lines on stderr so stdout stays reserved for classification
/// output. `quiet` turns every level off.
pub fn init_logging(quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("off")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}
