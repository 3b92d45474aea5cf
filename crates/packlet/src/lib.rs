mod bundle;
mod bundler;
mod ecma_compiler;
mod watcher;

pub use crate::{bundle::Bundle, bundler::Bundler};
pub use packlet_common::*;
pub use packlet_error::{BuildError, BuildResult, BundleError, BundleResult};
pub use packlet_fs::{FileSystem, OsFileSystem};
