use std::{borrow::Cow, ffi::OsStr, path::Path};

pub trait PathExt {
  /// `true` for the empty path, which stands for "no entry was given".
  fn is_empty_path(&self) -> bool;

  fn representative_file_name(&self) -> Cow<str>;
}

impl PathExt for Path {
  fn is_empty_path(&self) -> bool {
    self.as_os_str().is_empty()
  }

  /// The name an emitted file is derived from. Not guaranteed to be a valid JS identifier.
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), OsStr::to_string_lossy);

    match &*file_name {
      // `src/button/index.ts` emits as `button`, not `index`.
      "index" | "mod" => self
        .parent()
        .and_then(Self::file_stem)
        .map_or(file_name, OsStr::to_string_lossy),
      _ => file_name,
    }
  }
}
