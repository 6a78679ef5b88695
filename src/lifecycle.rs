//! Process-level setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Initialize logging with tracing_subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` applies to this crate and
/// HTTP internals are held at `warn`. Output goes to stderr so report JSON on
/// stdout stays machine-readable.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{level},hyper=warn,hyper_util=warn,reqwest=warn")))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // `try_init` so tests and embedders that already installed a subscriber are left alone.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .with_target(false)
        .with_ansi(true)
        .try_init();
}
