use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber for the CLI.
///
/// `RUST_LOG` takes precedence; otherwise `info`, or `debug` when verbose.
/// Stdout stays reserved for the report. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
