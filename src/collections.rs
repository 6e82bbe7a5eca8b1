use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;


/// Insertion ordered map with fast hashing
/// Entry positions are stable (nothing is ever removed), so they double as dense node indices
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index marking a node without predecessor
pub(crate) const NO_PARENT: usize = usize::MAX;
