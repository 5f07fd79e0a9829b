//! Move-keyed result cache.
//!
//! Deduplicates identical move requests: the first search for a move stores
//! its result here, and later requests for the same `(start, target)` pair
//! are served without running the finder again. Keys use the structural
//! equality and hashing of [`Move`], so equal moves always collide.

use crate::board::Move;
use crate::finder::{find_shortest_paths, KnightPath};
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Snapshot of cache counters for monitoring and debugging.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entry_count: usize,
}

impl CacheStats {
    /// Calculate the hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Concurrent cache of computed shortest-path results.
///
/// Results are immutable once stored and handed out behind `Arc`, so a hit
/// is a pointer clone. Safe to share across workers; all operations are
/// lock-free reads/writes on the underlying map.
#[derive(Debug, Default)]
pub struct PathCache {
    /// Cache storage
    paths: DashMap<Move, Arc<KnightPath>>,
    /// Lookup counters
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PathCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached result.
    ///
    /// Returns `Some` if the move has been computed before, `None`
    /// otherwise. Updates hit/miss statistics either way.
    pub fn get(&self, knight_move: &Move) -> Option<Arc<KnightPath>> {
        match self.paths.get(knight_move) {
            Some(entry) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(Arc::clone(entry.value()))
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Store a result for a move.
    ///
    /// Insertion is last-writer-wins: concurrent callers computing the same
    /// move may both insert, and exactly one result survives as the
    /// canonical entry. Both results are equal by construction, so either
    /// is acceptable.
    pub fn insert(&self, knight_move: Move, path: Arc<KnightPath>) {
        self.paths.insert(knight_move, path);
    }

    /// Look up the move, computing and storing the result on a miss.
    ///
    /// A hit returns the stored result without invoking the finder.
    pub fn get_or_compute(&self, knight_move: Move) -> Arc<KnightPath> {
        if let Some(path) = self.get(&knight_move) {
            return path;
        }

        let computed = Arc::new(find_shortest_paths(knight_move));
        self.insert(knight_move, Arc::clone(&computed));
        computed
    }

    /// Check if a move is cached.
    pub fn contains(&self, knight_move: &Move) -> bool {
        self.paths.contains_key(knight_move)
    }

    /// Current number of cached results.
    pub fn entry_count(&self) -> usize {
        self.paths.len()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.paths.clear();
    }

    /// Get a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entry_count: self.paths.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;

    fn test_move(target_file: i8) -> Move {
        Move::new(Square::new(0, 0), Square::new(target_file, 5))
    }

    #[test]
    fn test_cache_starts_empty() {
        let cache = PathCache::new();
        assert_eq!(cache.entry_count(), 0);
        assert_eq!(cache.stats().hits, 0);
        assert_eq!(cache.stats().misses, 0);
    }

    #[test]
    fn test_get_or_compute_miss_then_hit() {
        let cache = PathCache::new();
        let knight_move = test_move(5);

        let first = cache.get_or_compute(knight_move);
        let second = cache.get_or_compute(knight_move);

        assert!(Arc::ptr_eq(&first, &second), "hit must return stored Arc");
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.entry_count, 1);
    }

    #[test]
    fn test_distinct_moves_get_distinct_entries() {
        let cache = PathCache::new();
        cache.get_or_compute(test_move(3));
        cache.get_or_compute(test_move(5));

        assert_eq!(cache.entry_count(), 2);
        assert!(cache.contains(&test_move(3)));
        assert!(cache.contains(&test_move(5)));
        assert!(!cache.contains(&test_move(7)));
    }

    #[test]
    fn test_repeated_searches_do_not_grow_the_cache() {
        // The per-search arenas are dropped with each search; the only
        // retained state is one entry per distinct move.
        let cache = PathCache::new();
        for _ in 0..100 {
            cache.get_or_compute(test_move(5));
        }

        let stats = cache.stats();
        assert_eq!(stats.entry_count, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 99);
    }

    #[test]
    fn test_reverse_move_is_a_different_key() {
        let cache = PathCache::new();
        let forward = Move::new(Square::new(0, 0), Square::new(5, 5));
        let backward = Move::new(Square::new(5, 5), Square::new(0, 0));

        cache.get_or_compute(forward);
        cache.get_or_compute(backward);

        assert_eq!(cache.entry_count(), 2);
    }

    #[test]
    fn test_insert_is_last_writer_wins() {
        let cache = PathCache::new();
        let knight_move = test_move(5);
        let first = Arc::new(find_shortest_paths(knight_move));
        let second = Arc::new(find_shortest_paths(knight_move));

        cache.insert(knight_move, Arc::clone(&first));
        cache.insert(knight_move, Arc::clone(&second));

        assert_eq!(cache.entry_count(), 1);
        let stored = cache.get(&knight_move).unwrap();
        assert!(Arc::ptr_eq(&stored, &second));
    }

    #[test]
    fn test_clear() {
        let cache = PathCache::new();
        cache.get_or_compute(test_move(5));
        assert_eq!(cache.entry_count(), 1);

        cache.clear();
        assert_eq!(cache.entry_count(), 0);
        assert!(!cache.contains(&test_move(5)));
    }

    #[test]
    fn test_hit_rate() {
        let cache = PathCache::new();
        assert_eq!(cache.stats().hit_rate(), 0.0);

        cache.get_or_compute(test_move(5));
        cache.get_or_compute(test_move(5));
        cache.get_or_compute(test_move(5));
        cache.get_or_compute(test_move(5));

        let stats = cache.stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_concurrent_access_from_multiple_threads() {
        let cache = Arc::new(PathCache::new());
        let mut handles = Vec::new();

        for i in 0..4i8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                for _ in 0..25 {
                    let result = cache.get_or_compute(test_move(i % 2));
                    assert!(!result.shortest_paths.is_empty());
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        // Concurrent identical requests may each compute, but exactly one
        // canonical entry per move survives.
        assert_eq!(cache.entry_count(), 2);
    }
}
