use std::{
  ffi::OsString,
  path::{Path, PathBuf},
  time::Instant,
};

use anyhow::Context;
use async_trait::async_trait;
use oxc::span::SourceType;
use packlet_common::{BuildConfig, OutputFormat, SharedBuildConfig};
use packlet_error::{BuildResult, BundleError, BundleResult};
use packlet_fs::{FileSystem, OsFileSystem};
use packlet_utils::path_ext::PathExt;
use tracing::{debug, info};

use crate::{
  ecma_compiler::{CompileOptions, EcmaCompiler},
  watcher, Bundle,
};

/// Emits a single entry module with oxc. Imports are kept as they are, so every dependency ends
/// up external in the output. Only ESM is emitted; other formats fail the build.
#[derive(Clone)]
pub struct Bundler<F = OsFileSystem> {
  pub(crate) fs: F,
}

impl Bundler {
  pub fn new() -> Self {
    Self { fs: OsFileSystem }
  }
}

impl Default for Bundler {
  fn default() -> Self {
    Self::new()
  }
}

impl<F: FileSystem> Bundler<F> {
  pub fn with_file_system(fs: F) -> Self {
    Self { fs }
  }

  /// Compiles `entry` once and writes the result. Returns every file written, output first.
  pub fn write(&self, entry: &Path, config: &BuildConfig) -> BuildResult<Vec<PathBuf>> {
    debug!(
      entry = %entry.display(),
      format = %config.format,
      target = %config.target,
      runtime = %config.runtime,
      "Compiling entry"
    );

    if config.format != OutputFormat::Esm {
      let format = config.format;
      return Err(
        anyhow::anyhow!("Output format \"{format}\" is not supported, only \"esm\" is emitted")
          .into(),
      );
    }

    let source = self
      .fs
      .read_to_string(entry)
      .with_context(|| format!("Failed to read \"{}\"", entry.display()))?;
    let source_type = SourceType::from_path(entry)
      .map_err(|_| anyhow::anyhow!("Unsupported entry file extension: \"{}\"", entry.display()))?;

    let output = config.output_file(entry);
    let map_file = config.sourcemap.then(|| map_file_for(&output));

    let emitted = EcmaCompiler::compile(
      &source,
      entry,
      source_type,
      &CompileOptions { minify: config.minify, source_map_path: map_file.as_ref().map(|_| entry) },
    )?;

    for specifier in &emitted.imports {
      debug!(%specifier, external = config.is_external(specifier), "Import left unbundled");
    }

    if let Some(dir) = output.parent() {
      self
        .fs
        .create_dir_all(dir)
        .with_context(|| format!("Failed to create \"{}\"", dir.display()))?;
    }

    let mut code = emitted.code;
    let mut written = vec![output.clone()];
    if let (Some(map_file), Some(map)) = (map_file, emitted.map) {
      let name = map_file.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
      code = format!("{code}//# sourceMappingURL={name}\n");
      self
        .fs
        .write(&map_file, map.as_bytes())
        .with_context(|| format!("Failed to write \"{}\"", map_file.display()))?;
      written.push(map_file);
    }

    self
      .fs
      .write(&output, code.as_bytes())
      .with_context(|| format!("Failed to write \"{}\"", output.display()))?;

    Ok(written)
  }
}

impl<F: FileSystem + Clone + 'static> Bundler<F> {
  /// [`Self::write`] on the blocking pool, keeping compilation and file I/O off the async worker.
  pub(crate) async fn write_blocking(
    &self,
    entry: &Path,
    config: &SharedBuildConfig,
  ) -> BuildResult<Vec<PathBuf>> {
    let bundler = self.clone();
    let entry = entry.to_path_buf();
    let config = SharedBuildConfig::clone(config);

    tokio::task::spawn_blocking(move || bundler.write(&entry, &config))
      .await
      .map_err(anyhow::Error::from)?
  }
}

#[async_trait]
impl<F: FileSystem + Clone + 'static> Bundle for Bundler<F> {
  async fn bundle(&self, entry: &Path, config: SharedBuildConfig) -> BundleResult<()> {
    if entry.is_empty_path() || !self.fs.is_file(entry) {
      return Err(BundleError::EntryNotFound(entry.to_path_buf()));
    }

    let start = Instant::now();
    let written = self.write_blocking(entry, &config).await?;

    if config.watch {
      info!("Built in {:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
      let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
      };
      let rebuilds = watcher::watch(self, entry, &config, written, shutdown).await?;
      debug!(rebuilds, "Watch finished");
    }

    Ok(())
  }
}

fn map_file_for(output: &Path) -> PathBuf {
  let mut name = OsString::from(output.as_os_str());
  name.push(".map");
  PathBuf::from(name)
}
