use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "SHRED_LOG";

/// Installs a stderr subscriber. `SHRED_LOG` wins over the `-v` count.
pub fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
