mod args;
mod dispatch;
mod error;
mod logging;
mod normalize;
mod report;
#[cfg(test)]
mod testing;
mod types;

use std::{ffi::OsString, process::ExitCode};

use args::UnknownFlagPolicy;
use packlet::{Bundle, Bundler};
use report::Report;
use tracing::debug;

#[tokio::main]
async fn main() -> ExitCode {
  logging::init();

  let policy = UnknownFlagPolicy::from_env();
  let report = execute(&Bundler::new(), std::env::args_os().skip(1), policy).await;

  report.emit();
  report.exit_code()
}

/// One invocation from raw tokens to what gets printed. Never exits the process itself.
async fn execute<B, I, T>(engine: &B, tokens: I, policy: UnknownFlagPolicy) -> Report
where
  B: Bundle + ?Sized,
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
{
  let result = match args::parse(tokens, policy) {
    Ok(options) => dispatch::run(engine, &options).await,
    Err(error) => {
      debug!(kind = ?error.kind(), "Failed to parse arguments");
      Err(error.into())
    }
  };

  Report::from_result(result)
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use super::execute;
  use crate::{
    args::UnknownFlagPolicy,
    report::VERSION,
    testing::{Behavior, FakeEngine},
  };

  #[tokio::test]
  async fn parse_failure_prints_usage_and_fails() {
    let engine = FakeEngine::new(Behavior::Succeed);
    let report =
      execute(&engine, ["--format", "xyz", "src/index.ts"], UnknownFlagPolicy::Reject).await;
    assert_eq!(report.exit_code, 1);
    assert!(report.stdout[0].contains("Usage"));
    assert!(!report.stderr.is_empty());
    assert!(engine.calls().is_empty());
  }

  #[tokio::test]
  async fn version_exits_zero_without_entry() {
    let engine = FakeEngine::new(Behavior::EntryNotFound);
    let report = execute(&engine, ["--version"], UnknownFlagPolicy::Reject).await;
    assert_eq!(report.exit_code, 0);
    assert_eq!(report.stdout, [VERSION]);
    assert!(engine.calls().is_empty());
  }

  #[tokio::test]
  async fn help_exits_zero_regardless_of_other_flags() {
    let engine = FakeEngine::new(Behavior::Fail("never called"));
    let report =
      execute(&engine, ["-h", "-m", "-e", "react", "missing.ts"], UnknownFlagPolicy::Reject).await;
    assert_eq!(report.exit_code, 0);
    assert!(report.stdout[0].contains("--external"));
    assert!(engine.calls().is_empty());
  }

  #[tokio::test]
  async fn help_and_version_tolerate_repeated_flags() {
    let engine = FakeEngine::new(Behavior::Fail("never called"));
    for tokens in [
      &["-h", "-m", "-m"][..],
      &["-v", "-v"][..],
      &["-h", "--sourcemap", "--no-sourcemap"][..],
      &["-h", "-f", "cjs", "-f", "umd"][..],
    ] {
      let report = execute(&engine, tokens.iter().copied(), UnknownFlagPolicy::Reject).await;
      assert_eq!(report.exit_code, 0, "{tokens:?} exited with {:?}", report.stderr);
    }
    assert!(engine.calls().is_empty());
  }

  #[tokio::test]
  async fn successful_build_prints_timing() {
    let engine = FakeEngine::new(Behavior::Succeed);
    let report =
      execute(&engine, ["--cwd", "/tmp/proj", "src/index.ts"], UnknownFlagPolicy::Reject).await;
    assert_eq!(report.exit_code, 0);
    assert!(report.stdout[0].contains("Finished in"));
    assert!(report.stdout[0].contains(" ms"));
    assert_eq!(engine.calls(), [PathBuf::from("/tmp/proj/src/index.ts")]);
  }

  #[tokio::test]
  async fn watch_build_prints_no_timing() {
    let engine = FakeEngine::new(Behavior::Succeed);
    let report =
      execute(&engine, ["-w", "--cwd", "/tmp/proj", "src/index.ts"], UnknownFlagPolicy::Reject)
        .await;
    assert_eq!(report.exit_code, 0);
    assert!(report.stdout.iter().all(|line| !line.contains("Finished in")));
  }

  #[tokio::test]
  async fn missing_entry_prints_usage_and_fails() {
    let engine = FakeEngine::new(Behavior::EntryNotFound);
    let report = execute(&engine, ["--cwd", "/tmp/proj"], UnknownFlagPolicy::Reject).await;
    assert_eq!(report.exit_code, 1);
    assert!(report.stdout[0].contains("Usage"));
  }

  #[tokio::test]
  async fn build_failure_prints_the_error_only() {
    let engine = FakeEngine::new(Behavior::Fail("Unexpected token"));
    let report =
      execute(&engine, ["--cwd", "/tmp/proj", "src/index.ts"], UnknownFlagPolicy::Reject).await;
    assert_eq!(report.exit_code, 1);
    assert!(report.stdout.is_empty());
    assert!(report.stderr[0].contains("Unexpected token"));
  }

  #[tokio::test]
  async fn ignored_unknown_flags_still_build() {
    let engine = FakeEngine::new(Behavior::Succeed);
    let report = execute(
      &engine,
      ["--cwd", "/tmp/proj", "--legacy", "src/index.ts"],
      UnknownFlagPolicy::Ignore,
    )
    .await;
    assert_eq!(report.exit_code, 0);
    assert_eq!(engine.calls(), [PathBuf::from("/tmp/proj/src/index.ts")]);
  }

  #[tokio::test]
  async fn real_engine_reports_a_missing_entry() {
    let dir = std::env::temp_dir();
    let cwd = dir.to_string_lossy().into_owned();
    let report = execute(
      &packlet::Bundler::new(),
      ["--cwd", cwd.as_str(), "packlet-does-not-exist.ts"],
      UnknownFlagPolicy::Reject,
    )
    .await;
    assert_eq!(report.exit_code, 1);
    assert!(report.stderr[0].contains("packlet-does-not-exist.ts"));
  }

  #[tokio::test]
  async fn real_engine_refuses_commonjs_output() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("src")).unwrap();
    std::fs::write(dir.path().join("src/index.js"), "export const answer = 42;\n").unwrap();
    let cwd = dir.path().to_string_lossy().into_owned();

    let report = execute(
      &packlet::Bundler::new(),
      ["--cwd", cwd.as_str(), "-f", "cjs", "--no-sourcemap", "src/index.js"],
      UnknownFlagPolicy::Reject,
    )
    .await;
    assert_eq!(report.exit_code, 1);
    assert!(report.stderr.iter().any(|line| line.contains("\"cjs\" is not supported")));
    assert!(!dir.path().join("dist").exists());
  }
}
