use std::{
  ffi::{OsStr, OsString},
  path::PathBuf,
};

use clap::{
  error::{ContextKind, ContextValue, ErrorKind},
  ArgAction, Args, CommandFactory, Parser,
};
use tracing::{debug, warn};

use crate::{
  error::ArgumentError,
  types::{output_format::OutputFormat, runtime::Runtime},
};

pub const BIN_NAME: &str = "packlet";

#[derive(Parser)]
#[command(
  name = BIN_NAME,
  about = "Bundle a single entry into a distributable module",
  args_override_self = true,
  disable_help_flag = true,
  disable_version_flag = true
)]
pub struct Commands {
  /// Output the version number
  #[clap(long, short = 'v')]
  pub version: bool,

  /// Output usage information
  #[clap(long, short = 'h')]
  pub help: bool,

  #[clap(flatten)]
  pub input: InputArgs,

  #[clap(flatten)]
  pub output: OutputArgs,

  #[clap(flatten)]
  pub enhance: EnhanceArgs,
}

#[derive(Args)]
pub struct InputArgs {
  /// Entry file; only the first one is used
  #[clap(value_name = "SOURCE")]
  pub sources: Vec<PathBuf>,

  /// Specify current working directory
  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// Specify an external dependency
  #[clap(long, short = 'e', value_name = "MOD", action = ArgAction::Append)]
  pub external: Vec<String>,

  /// Build runtime
  #[clap(long, value_enum, default_value_t = Runtime::Browser)]
  pub runtime: Runtime,
}

#[derive(Args)]
pub struct OutputArgs {
  /// Specify output filename
  #[clap(long, short = 'o', value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Specify bundle type
  #[clap(long, short = 'f', value_enum, default_value_t = OutputFormat::Esm)]
  pub format: OutputFormat,

  /// Sourcemap generation, enabled by default
  #[clap(
    long,
    value_name = "BOOL",
    num_args = 0..=1,
    require_equals = true,
    default_missing_value = "true",
    overrides_with = "no_sourcemap"
  )]
  pub sourcemap: Option<bool>,

  /// Disable sourcemap generation
  #[clap(long, overrides_with = "sourcemap")]
  pub no_sourcemap: bool,
}

#[derive(Args)]
pub struct EnhanceArgs {
  /// Watch src files changes
  #[clap(long, short = 'w')]
  pub watch: bool,

  /// Compress output
  #[clap(long, short = 'm')]
  pub minify: bool,

  /// JS features target
  #[clap(long, default_value = "es5")]
  pub target: String,
}

/// Options exactly as given on the command line. Nothing here has touched the file system.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOptions {
  pub source: Option<PathBuf>,
  pub version: bool,
  pub help: bool,
  pub watch: bool,
  pub minify: bool,
  pub output: Option<PathBuf>,
  pub format: packlet::OutputFormat,
  /// In the order given, duplicates included.
  pub external: Vec<String>,
  pub target: String,
  pub runtime: packlet::Runtime,
  /// `None` when neither `--sourcemap` nor `--no-sourcemap` was passed.
  pub sourcemap: Option<bool>,
  pub cwd: Option<PathBuf>,
}

impl From<Commands> for ParsedOptions {
  fn from(commands: Commands) -> Self {
    let Commands { version, help, input, output, enhance } = commands;

    let mut sources = input.sources.into_iter();
    let source = sources.next();
    for ignored in sources {
      debug!(source = %ignored.display(), "Ignoring extra source");
    }

    Self {
      source,
      version,
      help,
      watch: enhance.watch,
      minify: enhance.minify,
      output: output.output,
      format: output.format.into(),
      external: input.external,
      target: enhance.target,
      runtime: input.runtime.into(),
      sourcemap: if output.no_sourcemap { Some(false) } else { output.sourcemap },
      cwd: input.cwd,
    }
  }
}

/// What to do with a flag the parser does not know.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownFlagPolicy {
  #[default]
  Reject,
  /// Drop the flag token and parse the rest. A value following the flag stays and may be
  /// taken as the source.
  Ignore,
}

impl UnknownFlagPolicy {
  pub const ENV: &'static str = "PACKLET_UNKNOWN_FLAGS";

  pub fn from_env() -> Self {
    std::env::var(Self::ENV).map_or_else(|_| Self::default(), |value| Self::from_name(&value))
  }

  fn from_name(value: &str) -> Self {
    match value.trim().to_ascii_lowercase().as_str() {
      "ignore" => Self::Ignore,
      "reject" | "" => Self::Reject,
      other => {
        warn!("Unknown {} value \"{other}\", rejecting unknown flags", Self::ENV);
        Self::Reject
      }
    }
  }
}

pub fn parse<I, T>(tokens: I, policy: UnknownFlagPolicy) -> Result<ParsedOptions, ArgumentError>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString>,
{
  let mut tokens: Vec<OsString> = tokens.into_iter().map(Into::into).collect();

  loop {
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(tokens.iter().cloned());
    let err = match Commands::try_parse_from(argv) {
      Ok(commands) => return Ok(commands.into()),
      Err(err) => err,
    };

    if policy == UnknownFlagPolicy::Reject || err.kind() != ErrorKind::UnknownArgument {
      return Err(err.into());
    }
    let Some(ContextValue::String(flag)) = err.get(ContextKind::InvalidArg) else {
      return Err(err.into());
    };
    let flag = flag.clone();

    let before = tokens.len();
    tokens.retain(|token| !is_flag_token(token, &flag));
    // Nothing to drop, e.g. the flag sits inside a group of short flags.
    if tokens.len() == before {
      return Err(err.into());
    }
    debug!(%flag, "Ignoring unknown flag");
  }
}

fn is_flag_token(token: &OsStr, flag: &str) -> bool {
  token.to_str().is_some_and(|token| {
    token == flag || token.strip_prefix(flag).is_some_and(|rest| rest.starts_with('='))
  })
}

pub fn usage() -> String {
  Commands::command().render_help().to_string()
}
