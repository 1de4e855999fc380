/// Multiplier for the `(46351 * x) ^ o` position hash.
const HASH_MULTIPLIER: u32 = 46_351;

/// Sentinel for "no entry" in bucket heads and chain links.
const NIL: u32 = u32::MAX;

/// Default capacity, comfortably above the 5,644,523 distinct `(x, o)`
/// pairs a full solve of the game visits.
pub const DEFAULT_CACHE_CAPACITY: usize = 10_000_007;

#[derive(Debug, Clone, Copy)]
struct Entry {
    x: u32,
    o: u32,
    value: i8,
    next: u32,
}

/// Snapshot of cache occupancy for diagnostics.
///
/// `histogram[n]` counts buckets holding exactly `n` entries for n in 0..=9;
/// `histogram[10]` counts buckets holding 10 or more.
#[derive(Debug, Clone, Copy)]
pub struct CacheStats {
    pub capacity: usize,
    pub population: usize,
    pub histogram: [usize; 11],
}

/// Fixed-capacity chaining transposition cache keyed by the two occupancy
/// bitmasks of a position, mover mask first.
///
/// - Entries live in a pool addressed by insertion order; buckets and chain
///   links hold pool indices.
/// - Bucket = `(46351 * x) ^ o mod capacity` (32-bit wrapping multiply).
/// - Append-only: entries are never evicted or replaced. Inserting past
///   capacity is a fatal condition — silent truncation would corrupt the
///   search, so the run aborts instead.
/// - A lookup matches only on bit-for-bit equality of both masks. The chain
///   walk must not stop early when a single field happens to match.
#[derive(Debug)]
pub struct ChainedTT {
    buckets: Vec<u32>,
    pool: Vec<Entry>,
    capacity: usize,
}

impl ChainedTT {
    /// Create a cache with room for `capacity` entries and as many buckets.
    /// A prime capacity spreads the multiplicative hash best.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be positive");
        Self {
            buckets: vec![NIL; capacity],
            pool: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    fn bucket_of(&self, x: u32, o: u32) -> usize {
        let h = HASH_MULTIPLIER.wrapping_mul(x) ^ o;
        (h as usize) % self.capacity
    }

    /// Exact value previously stored for `(x, o)`, if any.
    #[inline]
    pub fn lookup(&self, x: u32, o: u32) -> Option<i8> {
        let mut idx = self.buckets[self.bucket_of(x, o)];
        while idx != NIL {
            let entry = &self.pool[idx as usize];
            if entry.x == x && entry.o == o {
                return Some(entry.value);
            }
            idx = entry.next;
        }
        None
    }

    /// Store the value for `(x, o)`. Must be called at most once per
    /// distinct key; the caller is expected to have had a missed lookup.
    pub fn insert(&mut self, x: u32, o: u32, value: i8) {
        assert!(
            self.pool.len() < self.capacity,
            "transposition cache capacity ({}) exceeded",
            self.capacity
        );
        let bucket = self.bucket_of(x, o);
        let head = self.buckets[bucket];
        let idx = self.pool.len() as u32;
        self.pool.push(Entry {
            x,
            o,
            value,
            next: head,
        });
        self.buckets[bucket] = idx;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Occupancy snapshot: population and a bucket chain-length histogram.
    pub fn stats(&self) -> CacheStats {
        let mut histogram = [0usize; 11];
        for &head in &self.buckets {
            let mut idx = head;
            let mut chain = 0usize;
            while idx != NIL && chain <= 10 {
                chain += 1;
                idx = self.pool[idx as usize].next;
            }
            histogram[chain.min(10)] += 1;
        }
        CacheStats {
            capacity: self.capacity,
            population: self.pool.len(),
            histogram,
        }
    }
}
