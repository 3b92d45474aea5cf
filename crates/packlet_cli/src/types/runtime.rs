use clap::ValueEnum;

#[derive(PartialEq, Eq, Clone, Copy, Debug, ValueEnum)]
#[clap(rename_all = "lower")]
pub enum Runtime {
  Nodejs,
  Browser,
}

impl From<Runtime> for packlet::Runtime {
  fn from(value: Runtime) -> Self {
    match value {
      Runtime::Nodejs => packlet::Runtime::Nodejs,
      Runtime::Browser => packlet::Runtime::Browser,
    }
  }
}
