use std::num::NonZeroUsize;

use lru::LruCache;

use crate::tessellate::TriangleMesh;

/// LRU cache of tessellated fill meshes, keyed by geometry hash.
///
/// Meshes are stored pre-transform, so moving or scaling a shape between
/// frames never invalidates its entry.
pub(crate) struct TessellationCache {
    meshes: LruCache<u64, TriangleMesh>,
}

impl TessellationCache {
    pub(crate) fn new(size: NonZeroUsize) -> Self {
        Self {
            meshes: LruCache::new(size),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.meshes.len()
    }

    pub(crate) fn get_mesh(&mut self, cache_key: &u64) -> Option<TriangleMesh> {
        self.meshes.get(cache_key).cloned()
    }

    pub(crate) fn insert_mesh(&mut self, cache_key: u64, mesh: TriangleMesh) {
        self.meshes.put(cache_key, mesh);
    }
}
