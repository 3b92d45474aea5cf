use std::{io, path::Path};

/// The file operations the engine needs, so builds can run against something other than the disk.
pub trait FileSystem: Send + Sync {
  fn is_file(&self, path: &Path) -> bool;

  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;
}
