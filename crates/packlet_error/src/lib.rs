use std::{
  fmt::{self, Display},
  ops::{Deref, DerefMut},
  path::PathBuf,
};

/// Diagnostics collected while compiling one entry. Never empty when returned as an error.
#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

impl Display for BuildError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (index, error) in self.0.iter().enumerate() {
      if index > 0 {
        writeln!(f)?;
      }
      write!(f, "{error:#}")?;
    }
    Ok(())
  }
}

impl std::error::Error for BuildError {}

/// Failure of one `bundle` call, split by whether the CLI can recover with usage text.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
  #[error("Entry file does not exist: \"{}\"", .0.display())]
  EntryNotFound(PathBuf),
  #[error(transparent)]
  Build(#[from] BuildError),
}

impl From<anyhow::Error> for BundleError {
  fn from(error: anyhow::Error) -> Self {
    Self::Build(error.into())
  }
}

pub type BuildResult<T> = Result<T, BuildError>;
pub type BundleResult<T> = Result<T, BundleError>;
