//! Memoizing front end for the corpus filter.
//!
//! Field runs depend only on the field text, the rule table version and the
//! canonical query, so they can be cached across keystrokes without changing
//! results. Keys hash the field text instead of storing it.

use super::corpus::{FieldRuns, Query, SearchHit, Searchable, evaluate, field_runs, unfiltered};
use super::rules::NORMALIZATION_VERSION;
use ahash::RandomState;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::time::Instant;
use xxhash_rust::xxh3::xxh3_64;

/// Default number of memoized fields.
pub const DEFAULT_CACHE_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct RunKey {
    field_hash: u64,
    field_len: usize,
    version: u32,
    query: String,
}

impl RunKey {
    fn new(field: &str, normalized_query: &str) -> Self {
        Self {
            field_hash: xxh3_64(field.as_bytes()),
            field_len: field.len(),
            version: NORMALIZATION_VERSION,
            query: normalized_query.to_string(),
        }
    }
}

/// Reusable search front end with an optional LRU of computed field runs.
pub struct Searcher {
    cache: Option<LruCache<RunKey, FieldRuns, RandomState>>,
    hits: u64,
    misses: u64,
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher")
            .field("cached_fields", &self.cached_fields())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish()
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl Searcher {
    /// Create a searcher memoizing up to `capacity` fields. Zero disables
    /// memoization.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: NonZeroUsize::new(capacity)
                .map(|cap| LruCache::with_hasher(cap, RandomState::new())),
            hits: 0,
            misses: 0,
        }
    }

    /// Same contract and results as [`super::search`].
    pub fn search<R: Searchable>(&mut self, records: &[R], query: &str) -> Vec<SearchHit> {
        let Some(query) = Query::parse(query) else {
            return unfiltered(records);
        };

        let start = Instant::now();
        let (hits_before, misses_before) = (self.hits, self.misses);
        let hits: Vec<SearchHit> = records
            .iter()
            .enumerate()
            .filter_map(|(position, record)| {
                evaluate(&query, position, record, |raw, q| self.field_runs(raw, q))
            })
            .collect();

        tracing::debug!(
            "Searched {} records for {:?}: {} kept, {} cache hits, {} misses in {:?}",
            records.len(),
            query.normalized(),
            hits.len(),
            self.hits - hits_before,
            self.misses - misses_before,
            start.elapsed()
        );

        hits
    }

    fn field_runs(&mut self, raw: &str, normalized_query: &str) -> FieldRuns {
        let Some(cache) = self.cache.as_mut() else {
            return field_runs(raw, normalized_query);
        };

        let key = RunKey::new(raw, normalized_query);
        if let Some(cached) = cache.get(&key) {
            self.hits += 1;
            tracing::trace!("Run cache hit for field {:016x}", key.field_hash);
            return cached.clone();
        }

        self.misses += 1;
        tracing::trace!("Run cache miss for field {:016x}", key.field_hash);
        let computed = field_runs(raw, normalized_query);
        cache.put(key, computed.clone());
        computed
    }

    /// Number of fields currently memoized.
    pub fn cached_fields(&self) -> usize {
        self.cache.as_ref().map_or(0, LruCache::len)
    }

    /// Cache hit and miss counters since creation.
    pub const fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Drop every memoized field.
    pub fn clear(&mut self) {
        if let Some(cache) = self.cache.as_mut() {
            cache.clear();
        }
    }
}
