//! Bounded memoization for hot grid queries. Nothing in here does any new
//! math; it just remembers answers from [crate::hex] and [crate::layout].
//!
//! None of these types are meant to be shared between threads. They're owned
//! by a single [HexGrid](crate::HexGrid) and mutated through `&mut self`.

use crate::{
    hex::{Axial, HexCoordinate, Offset, OffsetParity},
    layout::{Layout, WorldPosition},
};
use derive_more::{Add, AddAssign, Display};
use fnv::FnvBuildHasher;
use log::trace;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, hash::Hash, num::NonZeroUsize};

/// What a full cache does when asked to store something new
#[derive(
    Copy, Clone, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Keep what's already cached and don't store the new entry. Once the
    /// cache fills up, its contents never change until it's cleared.
    Retain,
    /// Evict whichever entry was read or written least recently to make room
    LeastRecentlyUsed,
}

impl Default for EvictionPolicy {
    fn default() -> Self {
        Self::LeastRecentlyUsed
    }
}

/// Counters describing how well a cache is doing
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Add, AddAssign, Serialize,
)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that didn't
    pub misses: u64,
    /// Entries thrown out to make room for new ones
    pub evictions: u64,
    /// Inserts that were dropped because the cache was full (or disabled)
    pub rejected: u64,
}

/// A memoization map with a hard capacity. What happens when it's full is
/// controlled by an [EvictionPolicy]. A capacity of 0 disables the cache: every
/// lookup misses and every insert is dropped.
#[derive(Debug)]
pub struct BoundedCache<K: Eq + Hash, V> {
    /// `None` iff the capacity is 0
    entries: Option<LruCache<K, V, FnvBuildHasher>>,
    policy: EvictionPolicy,
    stats: CacheStats,
}

impl<K: Copy + Debug + Eq + Hash, V: Clone> BoundedCache<K, V> {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            entries: NonZeroUsize::new(capacity).map(|capacity| {
                LruCache::with_hasher(capacity, FnvBuildHasher::default())
            }),
            policy,
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries
            .as_ref()
            .map_or(0, |entries| entries.cap().get())
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.entries.as_ref().map_or(0, LruCache::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Check for an entry without counting it as a lookup or a use
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries
            .as_ref()
            .map_or(false, |entries| entries.contains(key))
    }

    /// Look up an entry, marking it as recently used
    pub fn get(&mut self, key: &K) -> Option<V> {
        let value = self
            .entries
            .as_mut()
            .and_then(|entries| entries.get(key))
            .cloned();
        if value.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        value
    }

    /// Store an entry. If the cache is full, this either evicts the least
    /// recently used entry or drops the new one, depending on the policy.
    pub fn insert(&mut self, key: K, value: V) {
        let entries = match &mut self.entries {
            Some(entries) => entries,
            None => {
                self.stats.rejected += 1;
                return;
            }
        };

        // Overwriting never needs room
        if !entries.contains(&key) && entries.len() >= entries.cap().get() {
            match self.policy {
                EvictionPolicy::Retain => {
                    trace!(
                        "Cache full ({} entries), not caching {:?}",
                        entries.len(),
                        key
                    );
                    self.stats.rejected += 1;
                    return;
                }
                EvictionPolicy::LeastRecentlyUsed => {
                    if let Some((evicted, _)) = entries.pop_lru() {
                        trace!("Evicting {:?} from cache", evicted);
                        self.stats.evictions += 1;
                    }
                }
            }
        }
        entries.put(key, value);
    }

    /// Get an entry, or compute and store it if it's missing
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce() -> V) -> V {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.insert(key, value.clone());
        value
    }

    /// Drop all entries and reset stats
    pub fn clear(&mut self) {
        if let Some(entries) = &mut self.entries {
            entries.clear();
        }
        self.stats = CacheStats::default();
    }
}

/// The set of memoized queries a [HexGrid](crate::HexGrid) serves. Each kind
/// of query gets its own [BoundedCache], all with the same capacity and policy.
#[derive(Debug)]
pub struct QueryCache {
    /// Keyed by the ordered pair, since distance is symmetric
    distances: BoundedCache<(Axial, Axial), u32>,
    neighbors: BoundedCache<Axial, [Axial; 6]>,
    world_positions: BoundedCache<Axial, WorldPosition>,
    offsets: BoundedCache<(Axial, OffsetParity), Offset>,
}

impl QueryCache {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            distances: BoundedCache::new(capacity, policy),
            neighbors: BoundedCache::new(capacity, policy),
            world_positions: BoundedCache::new(capacity, policy),
            offsets: BoundedCache::new(capacity, policy),
        }
    }

    pub fn distance(&mut self, a: Axial, b: Axial) -> u32 {
        let key = if a <= b { (a, b) } else { (b, a) };
        self.distances
            .get_or_insert_with(key, || a.distance_to(b))
    }

    pub fn neighbors(&mut self, tile: Axial) -> [Axial; 6] {
        self.neighbors.get_or_insert_with(tile, || tile.neighbors())
    }

    /// World position of a tile's center. Entries are keyed by tile only, so
    /// the cache must be cleared before it's used with a different layout.
    pub fn world_position(
        &mut self,
        layout: &Layout,
        tile: Axial,
    ) -> WorldPosition {
        self.world_positions
            .get_or_insert_with(tile, || tile.to_world_position(layout))
    }

    pub fn offset(&mut self, tile: Axial, parity: OffsetParity) -> Offset {
        self.offsets
            .get_or_insert_with((tile, parity), || {
                Offset::from_axial(tile, parity)
            })
    }

    /// Total number of entries across all tables
    pub fn len(&self) -> usize {
        self.distances.len()
            + self.neighbors.len()
            + self.world_positions.len()
            + self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Combined stats across all tables
    pub fn stats(&self) -> CacheStats {
        self.distances.stats()
            + self.neighbors.stats()
            + self.world_positions.stats()
            + self.offsets.stats()
    }

    pub fn clear(&mut self) {
        self.distances.clear();
        self.neighbors.clear();
        self.world_positions.clear();
        self.offsets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_insert() {
        let mut cache = BoundedCache::new(4, EvictionPolicy::LeastRecentlyUsed);
        let mut calls = 0;
        for _ in 0..3 {
            let value = cache.get_or_insert_with(7, || {
                calls += 1;
                "seven"
            });
            assert_eq!(value, "seven");
        }
        assert_eq!(calls, 1);
        assert_eq!(
            cache.stats(),
            CacheStats {
                hits: 2,
                misses: 1,
                evictions: 0,
                rejected: 0,
            }
        );
    }

    #[test]
    fn test_retain_when_full() {
        let mut cache = BoundedCache::new(2, EvictionPolicy::Retain);
        cache.insert(1, 'a');
        cache.insert(2, 'b');
        cache.insert(3, 'c');
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&1), Some('a'));
        assert_eq!(cache.get(&2), Some('b'));
        assert_eq!(cache.get(&3), None);
        assert_eq!(cache.stats().rejected, 1);

        // Overwriting an existing key is fine even when full
        cache.insert(1, 'z');
        assert_eq!(cache.get(&1), Some('z'));
        assert_eq!(cache.stats().rejected, 1);
    }

    #[test]
    fn test_lru_eviction() {
        let mut cache = BoundedCache::new(2, EvictionPolicy::LeastRecentlyUsed);
        cache.insert(1, 'a');
        cache.insert(2, 'b');
        // Touch 1 so that 2 is the oldest
        assert_eq!(cache.get(&1), Some('a'));
        cache.insert(3, 'c');
        assert_eq!(cache.len(), 2);
        assert!(cache.contains_key(&1));
        assert!(!cache.contains_key(&2));
        assert!(cache.contains_key(&3));
        assert_eq!(cache.stats().evictions, 1);

        cache.insert(4, 'd');
        assert!(!cache.contains_key(&1));
        assert!(cache.contains_key(&3));
        assert!(cache.contains_key(&4));
    }

    #[test]
    fn test_lru_after_many_hits() {
        let mut cache = BoundedCache::new(3, EvictionPolicy::LeastRecentlyUsed);
        cache.insert(1, ());
        cache.insert(2, ());
        cache.insert(3, ());
        // 2 is never read, so it goes first
        for _ in 0..50 {
            cache.get(&1);
            cache.get(&3);
        }
        cache.insert(4, ());
        assert!(!cache.contains_key(&2));
        cache.insert(5, ());
        assert!(!cache.contains_key(&1));
        assert!(cache.contains_key(&3));
        assert!(cache.contains_key(&4));
        assert!(cache.contains_key(&5));
    }

    #[test]
    fn test_zero_capacity() {
        let mut cache = BoundedCache::new(0, EvictionPolicy::LeastRecentlyUsed);
        assert_eq!(cache.get_or_insert_with(1, || 10), 10);
        assert_eq!(cache.get_or_insert_with(1, || 20), 20);
        assert!(cache.is_empty());
        assert_eq!(cache.stats().rejected, 2);
        assert_eq!(cache.stats().misses, 2);
    }

    #[test]
    fn test_clear() {
        let mut cache = BoundedCache::new(2, EvictionPolicy::LeastRecentlyUsed);
        cache.insert(1, 1);
        cache.get(&1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn test_query_cache() {
        let layout = Layout::default();
        let mut cache = QueryCache::new(16, EvictionPolicy::LeastRecentlyUsed);
        let a = Axial::new(0, 0);
        let b = Axial::new(3, -2);

        assert_eq!(cache.distance(a, b), 3);
        // Symmetric pairs share an entry
        assert_eq!(cache.distance(b, a), 3);
        assert_eq!(cache.stats().hits, 1);

        assert_eq!(cache.neighbors(b), b.neighbors());
        assert_eq!(
            cache.world_position(&layout, b),
            layout.hex_to_world(b)
        );
        assert_eq!(
            cache.offset(b, OffsetParity::Even),
            Offset::from_axial(b, OffsetParity::Even)
        );
        assert_ne!(
            cache.offset(b, OffsetParity::Even),
            cache.offset(b, OffsetParity::Odd)
        );
        assert_eq!(cache.len(), 5);

        cache.clear();
        assert!(cache.is_empty());
    }
}
