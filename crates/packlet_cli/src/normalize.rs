use std::path::{Path, PathBuf};

use anyhow::Context;
use packlet::BuildConfig;
use sugar_path::SugarPath;

use crate::args::ParsedOptions;

/// Resolves every path against the working directory and settles the remaining defaults.
///
/// `cwd` falls back to the process working directory; a relative one is taken relative to it.
pub fn normalize(options: &ParsedOptions, cwd: Option<&Path>) -> anyhow::Result<BuildConfig> {
  let cwd = match cwd {
    Some(dir) if dir.is_absolute() => dir.normalize(),
    Some(dir) => dir.absolutize_with(current_dir()?),
    None => current_dir()?,
  };

  Ok(BuildConfig {
    entry: options.source.as_ref().map(|source| source.absolutize_with(cwd.clone())),
    output: options.output.as_ref().map(|output| output.absolutize_with(cwd.clone())),
    external: options.external.iter().cloned().collect(),
    format: options.format,
    target: options.target.clone(),
    runtime: options.runtime,
    watch: options.watch,
    minify: options.minify,
    // Opt-out: only an explicit `false` disables it.
    sourcemap: options.sourcemap != Some(false),
    cwd,
  })
}

fn current_dir() -> anyhow::Result<PathBuf> {
  std::env::current_dir().context("Failed to get current dir")
}
