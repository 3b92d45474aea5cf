use std::process::ExitCode;

use ansi_term::Colour;

use crate::{args::usage, dispatch::Outcome, error::CliError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a finished invocation prints, and how the process exits.
#[derive(Debug, Default)]
pub struct Report {
  pub stdout: Vec<String>,
  pub stderr: Vec<String>,
  pub exit_code: u8,
}

impl Report {
  pub fn from_result(result: Result<Outcome, CliError>) -> Self {
    match result {
      Ok(outcome) => Self::success(outcome),
      Err(error) => Self::failure(error),
    }
  }

  fn success(outcome: Outcome) -> Self {
    let stdout = match outcome {
      Outcome::Version => vec![VERSION.to_string()],
      Outcome::Help => vec![usage()],
      Outcome::Built { elapsed } => {
        let elapsed =
          Colour::White.bold().paint(format!("{:.2} ms", elapsed.as_secs_f64() * 1000.0));
        vec![format!("{} Finished in {elapsed}", Colour::Green.paint("✔"))]
      }
      Outcome::Watched => vec![],
    };

    Self { stdout, stderr: vec![], exit_code: 0 }
  }

  fn failure(error: CliError) -> Self {
    let label = Colour::Red.paint("Error:");
    let (stdout, stderr) = match &error {
      // clap already prefixes its message with "error:".
      CliError::Argument(error) => (vec![usage()], vec![error.to_string()]),
      CliError::EntryNotFound(_) => (vec![usage()], vec![format!("{label} {error}")]),
      CliError::Build(errors) => {
        (vec![], errors.iter().map(|error| format!("{label} {error:#}")).collect())
      }
      CliError::Unexpected(error) => (vec![], vec![format!("{label} {error:?}")]),
    };

    Self { stdout, stderr, exit_code: 1 }
  }

  pub fn emit(&self) {
    for line in &self.stdout {
      println!("{line}");
    }
    for line in &self.stderr {
      eprintln!("{line}");
    }
  }

  pub fn exit_code(&self) -> ExitCode {
    ExitCode::from(self.exit_code)
  }
}
