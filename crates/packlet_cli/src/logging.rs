use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PACKLET_LOG";

const DEFAULT_FILTER: &str = "packlet=info,packlet_cli=info";

/// Diagnostics go to stderr so stdout only carries what the command prints on purpose.
pub fn init() {
  let filter =
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(false)
    .without_time()
    .with_writer(std::io::stderr)
    .init();
}
