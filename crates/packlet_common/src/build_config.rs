use std::path::{Path, PathBuf};

use packlet_utils::{indexmap::FxIndexSet, path_ext::PathExt};
use sugar_path::SugarPath;

use crate::{OutputFormat, Runtime};

/// Fully resolved options for one invocation.
///
/// Every path is absolute by the time this exists. It is built once and then only shared
/// behind [`crate::SharedBuildConfig`]; watch rebuilds reuse the same value.
#[allow(clippy::struct_excessive_bools)] // Using raw booleans is more clear in this case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  // --- Input
  /// `None` when no source was given on the command line.
  pub entry: Option<PathBuf>,
  pub cwd: PathBuf,
  pub external: FxIndexSet<String>,

  // --- Output
  pub output: Option<PathBuf>,
  pub format: OutputFormat,
  pub target: String,
  pub runtime: Runtime,
  pub minify: bool,
  pub sourcemap: bool,

  pub watch: bool,
}

impl BuildConfig {
  /// The file the given entry is emitted to: `--output` when given, otherwise
  /// `<cwd>/dist/<name><ext>`.
  pub fn output_file(&self, entry: &Path) -> PathBuf {
    self.output.clone().unwrap_or_else(|| {
      let file_name =
        format!("{}{}", entry.representative_file_name(), self.format.default_extension());
      self.cwd.join("dist").join(file_name).normalize()
    })
  }

  pub fn is_external(&self, specifier: &str) -> bool {
    self.external.contains(specifier)
  }
}
