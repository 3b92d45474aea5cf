use std::{
  path::{Path, PathBuf},
  sync::Mutex,
};

use async_trait::async_trait;
use packlet::{Bundle, BundleError, BundleResult, SharedBuildConfig};

#[derive(Clone, Copy)]
pub enum Behavior {
  Succeed,
  EntryNotFound,
  Fail(&'static str),
}

/// Stands in for the engine and remembers the entries it was asked to build.
pub struct FakeEngine {
  behavior: Behavior,
  calls: Mutex<Vec<PathBuf>>,
}

impl FakeEngine {
  pub fn new(behavior: Behavior) -> Self {
    Self { behavior, calls: Mutex::new(vec![]) }
  }

  pub fn calls(&self) -> Vec<PathBuf> {
    self.calls.lock().unwrap().clone()
  }
}

#[async_trait]
impl Bundle for FakeEngine {
  async fn bundle(&self, entry: &Path, _config: SharedBuildConfig) -> BundleResult<()> {
    self.calls.lock().unwrap().push(entry.to_path_buf());
    match self.behavior {
      Behavior::Succeed => Ok(()),
      Behavior::EntryNotFound => Err(BundleError::EntryNotFound(entry.to_path_buf())),
      Behavior::Fail(message) => Err(anyhow::anyhow!(message).into()),
    }
  }
}
