use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;


/// Memo of built profiles keyed by item id.
pub struct ProfileCache {
    cache: Mutex<LruCache<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
    pub hit_rate: f64,
}

impl ProfileCache {
    /// Returns `None` for a zero capacity; callers treat that as "no cache".
    pub fn new(capacity: usize) -> Option<Self> {
        let capacity = NonZeroUsize::new(capacity)?;
        Some(Self {
            cache: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        })
    }

    pub fn get(&self, item_id: &str) -> Option<String> {
        let mut cache = self.cache.lock();
        match cache.get(item_id) {
            Some(profile) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(profile.clone())
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    pub fn set(&self, item_id: &str, profile: String) {
        self.cache.lock().put(item_id.to_string(), profile);
    }

    /// Drops the entry for one item, e.g. after its reviews changed.
    pub fn invalidate(&self, item_id: &str) -> bool {
        self.cache.lock().pop(item_id).is_some()
    }

    pub fn stats(&self) -> CacheStats {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        let hit_rate = if total > 0 { hits as f64 / total as f64 } else { 0.0 };

        CacheStats {
            hits,
            misses,
            size: self.cache.lock().len(),
            hit_rate,
        }
    }

    pub fn clear(&self) {
        self.cache.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}
