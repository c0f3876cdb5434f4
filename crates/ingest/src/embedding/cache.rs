use std::num::NonZeroUsize;

use lru::LruCache;
use sha2::{Digest, Sha256};

/// LRU cache of embedding vectors keyed by content digest.
///
/// Keys are SHA-256 of the text, so identical chunk contents (a common
/// outcome of overlap windows across re-uploads) never hit the
/// provider twice while the entry is warm.
pub struct EmbeddingCache {
    cache: LruCache<[u8; 32], Vec<f32>>,
    hits: u64,
    misses: u64,
}

impl EmbeddingCache {
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    fn digest(text: &str) -> [u8; 32] {
        Sha256::digest(text.as_bytes()).into()
    }

    /// Look up a cached vector by text content.
    pub fn get(&mut self, text: &str) -> Option<Vec<f32>> {
        match self.cache.get(&Self::digest(text)) {
            Some(vector) => {
                self.hits += 1;
                Some(vector.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store a vector for a text content.
    pub fn put(&mut self, text: &str, vector: Vec<f32>) {
        self.cache.put(Self::digest(text), vector);
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_then_hit() {
        let mut cache = EmbeddingCache::new(16);

        assert!(cache.get("chunk text").is_none());
        assert_eq!(cache.misses(), 1);

        cache.put("chunk text", vec![0.5, 0.25]);
        assert_eq!(cache.get("chunk text").unwrap(), vec![0.5, 0.25]);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn identical_content_shares_an_entry() {
        let mut cache = EmbeddingCache::new(16);
        cache.put(&"same".to_string(), vec![1.0]);
        assert!(cache.get("same").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_least_recently_used() {
        let mut cache = EmbeddingCache::new(2);
        cache.put("a", vec![1.0]);
        cache.put("b", vec![2.0]);
        cache.put("c", vec![3.0]);

        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut cache = EmbeddingCache::new(0);
        cache.put("x", vec![1.0]);
        assert!(cache.get("x").is_some());
    }

    #[test]
    fn hit_rate() {
        let mut cache = EmbeddingCache::new(8);
        assert_eq!(cache.hit_rate(), 0.0);
        cache.put("x", vec![1.0]);
        cache.get("x");
        cache.get("y");
        assert!((cache.hit_rate() - 0.5).abs() < f64::EPSILON);
    }
}
