mod build_config;
mod types;

use std::sync::Arc;

pub use crate::{
  build_config::BuildConfig,
  types::{output_format::OutputFormat, runtime::Runtime},
};

pub type SharedBuildConfig = Arc<BuildConfig>;
