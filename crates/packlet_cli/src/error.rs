use std::path::PathBuf;

use packlet::BuildError;

/// The command line could not be turned into options.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ArgumentError(#[from] clap::Error);

impl ArgumentError {
  pub fn kind(&self) -> clap::error::ErrorKind {
    self.0.kind()
  }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
  #[error(transparent)]
  Argument(#[from] ArgumentError),
  #[error("Entry file does not exist: \"{}\"", .0.display())]
  EntryNotFound(PathBuf),
  #[error(transparent)]
  Build(BuildError),
  #[error(transparent)]
  Unexpected(#[from] anyhow::Error),
}
