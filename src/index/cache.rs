use crate::error::GeohashError;
use crate::index::adjacency::{self, RING_PATH};
use crate::index::direction::Direction;
use log::debug;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Memoizes adjacency and neighbor lookups.
///
/// A cache is an ordinary value: create one per workload and share it by
/// reference (it is `Send + Sync`). Entries are never evicted, since the
/// lookup tables are constant and a stored result can never go stale; call
/// [`clear`](Self::clear) to release memory.
///
/// Results are always identical to the uncached [`adjacent`](crate::adjacent)
/// and [`neighbors`](crate::neighbors) functions.
///
/// # Example
/// ```
/// use geohash_rs::{Direction, GeohashCache};
///
/// # fn main() -> Result<(), geohash_rs::GeohashError> {
/// let cache = GeohashCache::new();
/// let east = cache.adjacent("ezs42", Direction::Right)?;
/// assert_eq!(east, "ezs43");
///
/// let ring = cache.neighbors("ezs42")?;
/// assert_eq!(ring[2], east);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct GeohashCache {
    /// One map per direction, indexed by `Direction::index`
    adjacent: [RwLock<FxHashMap<String, String>>; 4],
    neighbors: RwLock<FxHashMap<String, [String; 8]>>,
}

impl GeohashCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached form of [`adjacent`](crate::adjacent).
    pub fn adjacent(&self, geohash: &str, direction: Direction) -> Result<String, GeohashError> {
        let map = &self.adjacent[direction.index()];

        if let Some(hit) = map.read().get(geohash).cloned() {
            return Ok(hit);
        }

        debug!("adjacent cache miss: {} {}", geohash, direction);
        let resolved = adjacency::adjacent(geohash, direction)?;
        map.write().insert(geohash.to_string(), resolved.clone());
        Ok(resolved)
    }

    /// Cached form of [`neighbors`](crate::neighbors).
    ///
    /// Each step of the ring goes through [`adjacent`](Self::adjacent), so
    /// the individual steps are cached as well.
    pub fn neighbors(&self, geohash: &str) -> Result<[String; 8], GeohashError> {
        if let Some(hit) = self.neighbors.read().get(geohash).cloned() {
            return Ok(hit);
        }

        debug!("neighbors cache miss: {}", geohash);
        let ring = adjacency::into_ring(self.walk(geohash, &RING_PATH)?)?;

        self.neighbors
            .write()
            .insert(geohash.to_string(), ring.clone());
        Ok(ring)
    }

    /// Cached form of [`walk`](crate::walk).
    pub fn walk(&self, base: &str, path: &[Direction]) -> Result<Vec<String>, GeohashError> {
        let mut current = base.to_string();
        path.iter()
            .map(|&direction| {
                current = self.adjacent(&current, direction)?;
                Ok(current.clone())
            })
            .collect()
    }

    /// Total number of stored entries across both caches.
    pub fn len(&self) -> usize {
        let adjacent: usize = self.adjacent.iter().map(|map| map.read().len()).sum();
        adjacent + self.neighbors.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        for map in &self.adjacent {
            map.write().clear();
        }
        self.neighbors.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::adjacency::{adjacent, neighbors, walk};

    #[test]
    fn test_cache_is_transparent() -> Result<(), GeohashError> {
        let cache = GeohashCache::new();
        for geohash in ["u0", "ub", "ezs42", "z", "dqcjqcp"] {
            for direction in Direction::ALL {
                let first = cache.adjacent(geohash, direction)?;
                let second = cache.adjacent(geohash, direction)?;
                assert_eq!(first, adjacent(geohash, direction)?);
                assert_eq!(first, second);
            }
            assert_eq!(cache.neighbors(geohash)?, neighbors(geohash)?);
            assert_eq!(cache.neighbors(geohash)?, neighbors(geohash)?);
        }
        Ok(())
    }

    #[test]
    fn test_cache_populates_and_clears() -> Result<(), GeohashError> {
        let cache = GeohashCache::new();
        assert!(cache.is_empty());

        cache.adjacent("ezs42", Direction::Top)?;
        assert_eq!(cache.len(), 1);

        // repeated lookups do not grow the cache
        cache.adjacent("ezs42", Direction::Top)?;
        assert_eq!(cache.len(), 1);

        cache.neighbors("ezs42")?;
        assert!(cache.len() > 1);

        cache.clear();
        assert!(cache.is_empty());
        Ok(())
    }

    #[test]
    fn test_cached_neighbors_follow_ring_path() -> Result<(), GeohashError> {
        let cache = GeohashCache::new();
        let ring = cache.neighbors("ezs42")?;
        assert_eq!(ring.to_vec(), walk("ezs42", &RING_PATH)?);

        // eight ring steps plus the ring itself
        assert_eq!(cache.len(), 9);
        Ok(())
    }

    #[test]
    fn test_errors_are_not_cached() {
        let cache = GeohashCache::new();
        assert!(cache.adjacent("", Direction::Left).is_err());
        assert!(cache.neighbors("ab").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_independent_caches() -> Result<(), GeohashError> {
        let first = GeohashCache::new();
        let second = GeohashCache::new();
        first.neighbors("gbsuv")?;
        assert!(!first.is_empty());
        assert!(second.is_empty());
        Ok(())
    }

    #[test]
    fn test_cached_walk() -> Result<(), GeohashError> {
        let cache = GeohashCache::new();
        let path = [Direction::Right, Direction::Right, Direction::Top];
        assert_eq!(cache.walk("ezs42", &path)?, walk("ezs42", &path)?);
        Ok(())
    }

    #[test]
    fn test_shared_across_threads() -> Result<(), GeohashError> {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeohashCache>();

        let cache = GeohashCache::new();
        let expected = neighbors("u4pruydqqvj")?;

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| cache.neighbors("u4pruydqqvj")))
                .collect();
            for handle in handles {
                let ring = handle.join().expect("worker panicked");
                assert_eq!(ring, Ok(expected.clone()));
            }
        });
        Ok(())
    }
}
