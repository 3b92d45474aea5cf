use std::{
  sync::Arc,
  time::{Duration, Instant},
};

use packlet::{Bundle, BundleError, SharedBuildConfig};
use tracing::debug;

use crate::{args::ParsedOptions, error::CliError, normalize::normalize};

#[derive(Debug)]
pub enum Outcome {
  Version,
  Help,
  Built { elapsed: Duration },
  /// Watch mode ended. Each rebuild was already reported by the engine.
  Watched,
}

/// Handles `--version` and `--help` before anything is resolved, then builds.
pub async fn run<B: Bundle + ?Sized>(
  engine: &B,
  options: &ParsedOptions,
) -> Result<Outcome, CliError> {
  if options.version {
    return Ok(Outcome::Version);
  }
  if options.help {
    return Ok(Outcome::Help);
  }

  let config = normalize(options, options.cwd.as_deref())?;
  build(engine, Arc::new(config)).await
}

pub async fn build<B: Bundle + ?Sized>(
  engine: &B,
  config: SharedBuildConfig,
) -> Result<Outcome, CliError> {
  let entry = config.entry.clone().unwrap_or_default();
  let watch = config.watch;
  debug!(entry = %entry.display(), format = %config.format, watch, "Starting build");

  let start = Instant::now();
  match engine.bundle(&entry, config).await {
    Ok(()) if watch => Ok(Outcome::Watched),
    Ok(()) => Ok(Outcome::Built { elapsed: start.elapsed() }),
    Err(BundleError::EntryNotFound(path)) => Err(CliError::EntryNotFound(path)),
    Err(BundleError::Build(errors)) => Err(CliError::Build(errors)),
  }
}
