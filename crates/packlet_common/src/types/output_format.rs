use std::fmt::Display;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
  #[default]
  Esm,
  Cjs,
  Umd,
}

impl OutputFormat {
  /// Extension of the file emitted when no `--output` is given.
  #[inline]
  pub fn default_extension(&self) -> &'static str {
    match self {
      Self::Esm => ".js",
      Self::Cjs => ".cjs",
      Self::Umd => ".umd.js",
    }
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Esm => write!(f, "esm"),
      Self::Cjs => write!(f, "cjs"),
      Self::Umd => write!(f, "umd"),
    }
  }
}
