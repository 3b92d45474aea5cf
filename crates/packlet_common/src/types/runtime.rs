use std::fmt::Display;

/// Where the emitted bundle is expected to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Runtime {
  Nodejs,
  #[default]
  Browser,
}

impl Display for Runtime {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Nodejs => write!(f, "nodejs"),
      Self::Browser => write!(f, "browser"),
    }
  }
}
