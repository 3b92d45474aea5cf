use std::path::Path;

use async_trait::async_trait;
use packlet_common::SharedBuildConfig;
use packlet_error::BundleResult;

/// Compiles one entry into its output.
///
/// An empty `entry` means no source was given and must fail with
/// [`packlet_error::BundleError::EntryNotFound`]. When `config.watch` is set the returned future
/// only resolves once watching stops.
#[async_trait]
pub trait Bundle: Send + Sync {
  async fn bundle(&self, entry: &Path, config: SharedBuildConfig) -> BundleResult<()>;
}
