use std::hash::BuildHasherDefault;
use indexmap::IndexSet;
use rustc_hash::FxHasher;


/// Use indexmap for stable insertion indices and rustc_hash for fast hashing
/// The position of a key in the set is its index in every index-addressed table
pub(crate) type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
