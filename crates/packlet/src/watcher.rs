use std::{
  future::Future,
  path::{Path, PathBuf},
  time::{Duration, Instant},
};

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use packlet_common::SharedBuildConfig;
use packlet_error::BundleResult;
use packlet_fs::FileSystem;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::Bundler;

/// Editors tend to emit several events per save.
const DEBOUNCE: Duration = Duration::from_millis(50);

/// Rebuilds `entry` whenever something next to it changes, until `shutdown` resolves.
///
/// `outputs` are the files the previous build wrote; changes to them alone never trigger a
/// rebuild. A failed rebuild is logged and watching continues. Returns how many rebuilds ran.
pub(crate) async fn watch<F, S>(
  bundler: &Bundler<F>,
  entry: &Path,
  config: &SharedBuildConfig,
  mut outputs: Vec<PathBuf>,
  shutdown: S,
) -> BundleResult<usize>
where
  F: FileSystem + Clone + 'static,
  S: Future<Output = ()>,
{
  let watch_dir = entry.parent().unwrap_or(&config.cwd);

  let (tx, mut rx) = mpsc::unbounded_channel();
  let mut watcher = RecommendedWatcher::new(
    move |res: notify::Result<Event>| match res {
      Ok(event) => {
        let _ = tx.send(event);
      }
      Err(err) => warn!("Watch error: {err}"),
    },
    notify::Config::default(),
  )
  .map_err(anyhow::Error::from)?;
  watcher.watch(watch_dir, RecursiveMode::Recursive).map_err(anyhow::Error::from)?;

  info!("Watching {} for changes", watch_dir.display());

  tokio::pin!(shutdown);
  let mut rebuilds = 0;
  loop {
    tokio::select! {
      () = &mut shutdown => {
        info!("Stopped watching");
        return Ok(rebuilds);
      }
      event = rx.recv() => {
        let Some(event) = event else {
          return Ok(rebuilds);
        };

        tokio::time::sleep(DEBOUNCE).await;
        let mut dirty = should_rebuild(&event, &outputs);
        while let Ok(event) = rx.try_recv() {
          dirty |= should_rebuild(&event, &outputs);
        }
        if !dirty {
          continue;
        }

        rebuilds += 1;
        let start = Instant::now();
        match bundler.write_blocking(entry, config).await {
          Ok(written) => {
            outputs = written;
            info!("Rebuilt in {:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
          }
          Err(errors) => {
            for error in errors.iter() {
              error!("{error:#}");
            }
          }
        }
      }
    }
  }
}

fn should_rebuild(event: &Event, outputs: &[PathBuf]) -> bool {
  matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_))
    && event.paths.iter().any(|path| !outputs.contains(path))
}
