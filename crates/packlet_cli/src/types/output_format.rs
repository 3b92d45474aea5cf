use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum OutputFormat {
  Esm,
  Cjs,
  Umd,
}

impl From<OutputFormat> for packlet::OutputFormat {
  fn from(value: OutputFormat) -> Self {
    match value {
      OutputFormat::Esm => packlet::OutputFormat::Esm,
      OutputFormat::Cjs => packlet::OutputFormat::Cjs,
      OutputFormat::Umd => packlet::OutputFormat::Umd,
    }
  }
}
