use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

/// Keeps insertion order so diagnostics list items the way the user gave them.
pub type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
