//! Content-addressed cache for computed results.
//!
//! Entries are keyed by the SHA-256 of a value's JSON serialization, so two
//! identical documents share one entry however they were loaded. The cache
//! sits entirely outside the pure domain computations it memoizes.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hex SHA-256 of `document`'s JSON form.
pub fn fingerprint<T: Serialize>(document: &T) -> Result<String, serde_json::Error> {
    let bytes = serde_json::to_vec(document)?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

/// A bounded, thread-safe map from document fingerprint to result.
///
/// When full, an arbitrary entry is evicted to make room. A capacity of zero
/// stores nothing.
pub struct DocumentCache<V> {
    entries: DashMap<String, Arc<V>>,
    capacity: usize,
}

impl<V> DocumentCache<V> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    /// Insert a value, evicting another entry if the cache is full.
    pub fn insert(&self, key: String, value: V) -> Arc<V> {
        let value = Arc::new(value);
        if !self.is_enabled() {
            return value;
        }
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            // Collect the victim first; removing while iterating would deadlock the shard.
            let victim = self.entries.iter().next().map(|entry| entry.key().clone());
            if let Some(victim) = victim {
                self.entries.remove(&victim);
            }
        }
        self.entries.insert(key, Arc::clone(&value));
        value
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fingerprint_is_stable_hex() {
        let a = fingerprint(&json!({"name": "Nighthawk"})).expect("serializes");
        let b = fingerprint(&json!({"name": "Nighthawk"})).expect("serializes");
        let c = fingerprint(&json!({"name": "Raven"})).expect("serializes");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|ch| ch.is_ascii_hexdigit()));
    }

    #[test]
    fn insert_and_get() {
        let cache = DocumentCache::new(4);
        cache.insert("key".to_string(), 42);
        assert_eq!(cache.get("key").as_deref(), Some(&42));
        assert!(cache.get("missing").is_none());
    }

    #[test]
    fn capacity_is_never_exceeded() {
        let cache = DocumentCache::new(2);
        for i in 0..5 {
            cache.insert(format!("key{i}"), i);
        }
        assert_eq!(cache.len(), 2);
        assert!(cache.get("key4").is_some());
    }

    #[test]
    fn replacing_a_key_does_not_evict() {
        let cache = DocumentCache::new(2);
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("a".to_string(), 3);
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").as_deref(), Some(&3));
        assert_eq!(cache.get("b").as_deref(), Some(&2));
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let cache = DocumentCache::new(0);
        let value = cache.insert("key".to_string(), 7);
        assert_eq!(*value, 7);
        assert!(cache.is_empty());
        assert!(!cache.is_enabled());
    }

    #[test]
    fn clear_empties_cache() {
        let cache = DocumentCache::new(3);
        cache.insert("a".to_string(), 1);
        cache.clear();
        assert!(cache.is_empty());
    }
}
