// Memoizing front for an engine.
//
// Entries are keyed by the folded word, so spellings that differ only in
// case share one entry. When the cache is full it is cleared before the
// next insert; there is no eviction order.

use hashbrown::HashMap;
use log::debug;
use metaphone_core::character::fold_into;
use metaphone_core::{EncoderOptions, Encoding};

use crate::encoder::Metaphone3;

/// Entries allocated up front; the map grows toward `capacity` on demand.
const PRESIZE: usize = 256;

/// An engine with a bounded map from folded words to their encodings.
///
/// A capacity of 0 disables caching.
#[derive(Debug)]
pub struct EncodingCache {
    engine: Metaphone3,
    entries: HashMap<Box<[char]>, Encoding>,
    capacity: usize,
    folded: Vec<char>,
    hits: u64,
    misses: u64,
}

impl EncodingCache {
    pub fn new(options: EncoderOptions, capacity: usize) -> Self {
        Self {
            engine: Metaphone3::new(options),
            entries: HashMap::with_capacity(capacity.min(PRESIZE)),
            capacity,
            folded: Vec::new(),
            hits: 0,
            misses: 0,
        }
    }

    pub fn options(&self) -> EncoderOptions {
        self.engine.options()
    }

    pub fn encode(&mut self, word: &str) -> Encoding {
        if word.is_empty() {
            return Encoding::default();
        }
        fold_into(word, &mut self.folded);

        if let Some(hit) = self.entries.get(self.folded.as_slice()) {
            self.hits += 1;
            return hit.clone();
        }
        self.misses += 1;

        let encoding = self.engine.encode_folded(&self.folded);
        if self.capacity == 0 {
            return encoding;
        }
        if self.entries.len() >= self.capacity {
            debug!("encoding cache full at {} entries, clearing", self.entries.len());
            self.entries.clear();
        }
        self.entries
            .insert(self.folded.clone().into_boxed_slice(), encoding.clone());
        encoding
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_after_miss() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), 16);
        let first = cache.encode("SCHMIDT");
        let second = cache.encode("SCHMIDT");
        assert_eq!(first, second);
        assert_eq!((cache.hits(), cache.misses()), (1, 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn case_variants_share_an_entry() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), 16);
        cache.encode("smith");
        cache.encode("Smith");
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.hits(), 1);
    }

    #[test]
    fn full_cache_is_cleared() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), 2);
        cache.encode("ONE");
        cache.encode("TWO");
        assert_eq!(cache.len(), 2);
        cache.encode("THREE");
        assert_eq!(cache.len(), 1);
        // "ONE" was dropped with the rest.
        cache.encode("ONE");
        assert_eq!(cache.misses(), 4);
    }

    #[test]
    fn zero_capacity_bypasses() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), 0);
        assert_eq!(cache.encode("DEBT").primary, "TT");
        assert_eq!(cache.encode("DEBT").primary, "TT");
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 2);
    }

    #[test]
    fn empty_word_is_not_cached() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), 4);
        assert!(cache.encode("").is_empty());
        assert!(cache.is_empty());
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn huge_capacity_does_not_preallocate() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), usize::MAX);
        assert_eq!(cache.encode("DEBT").primary, "TT");
        assert_eq!(cache.capacity(), usize::MAX);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut cache = EncodingCache::new(EncoderOptions::default(), 4);
        cache.encode("CAT");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
    }
}
