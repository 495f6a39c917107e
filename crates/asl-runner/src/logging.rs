use tracing_subscriber::EnvFilter;

/// Filter directive for the given `-v` count and `-q` flag.
pub fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "info,asl_sdk=debug,asl_runner=debug",
        _ => "trace",
    }
}

/// Installs the stderr `fmt` subscriber. `RUST_LOG` wins over the flags when set.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter(verbose, quiet)));

    // stdout carries the rendered definition, so logs go to stderr.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
