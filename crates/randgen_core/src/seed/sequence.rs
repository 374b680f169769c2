//! Counter-based seed source.
//!
//! Index `n` of the stream maps to `low + ((n * multiplier + offset) mod size)`.
//! With `multiplier` coprime to `size` this is a permutation of the range,
//! so the first `size` seeds are pairwise distinct and any index can be
//! computed directly without replaying the stream.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{SeedRange, SeedSource};
use crate::error::{RandGenError, Result};

/// Order in which a [`SeedSequence`] walks its range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedOrder {
    /// Pseudo-random permutation derived from the master seed.
    ///
    /// Neighbouring streams get unrelated seeds, which matters for the
    /// congruential generators: seeds `s` and `s + 1` give correlated
    /// RANECU streams.
    #[default]
    Scrambled,
    /// Consecutive seeds starting at `master mod size`.
    Sequential,
}

impl FromStr for SeedOrder {
    type Err = RandGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "scrambled" => Ok(SeedOrder::Scrambled),
            "sequential" => Ok(SeedOrder::Sequential),
            _ => Err(RandGenError::UnknownSeedOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SeedOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedOrder::Scrambled => write!(f, "scrambled"),
            SeedOrder::Sequential => write!(f, "sequential"),
        }
    }
}

/// What a [`SeedSequence`] does once every seed in its range is used.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exhaustion {
    /// Fail with [`RandGenError::SeedSpaceExhausted`].
    #[default]
    Fail,
    /// Restart the permutation. Seeds are then unique per cycle only.
    Wrap,
}

impl FromStr for Exhaustion {
    type Err = RandGenError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(Exhaustion::Fail),
            "wrap" => Ok(Exhaustion::Wrap),
            _ => Err(RandGenError::UnknownExhaustion(s.to_string())),
        }
    }
}

impl fmt::Display for Exhaustion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exhaustion::Fail => write!(f, "fail"),
            Exhaustion::Wrap => write!(f, "wrap"),
        }
    }
}

/// Reproducible, collision-free seed stream over a [`SeedRange`].
///
/// The cursor is an [`AtomicU64`]; concurrent callers never receive the same
/// index, and a multi-seed request is served from one contiguous block.
///
/// # Examples
///
/// ```rust
/// use randgen_core::seed::{SeedRange, SeedSequence, SeedSource};
///
/// let range = SeedRange::new(1, 1_000).unwrap();
/// let a = SeedSequence::new(42, range);
/// let b = SeedSequence::new(42, range);
///
/// for _ in 0..10 {
///     assert_eq!(a.next_seed().unwrap(), b.next_seed().unwrap());
/// }
/// assert_eq!(a.emitted(), 10);
/// ```
#[derive(Debug)]
pub struct SeedSequence {
    master: u64,
    range: SeedRange,
    order: SeedOrder,
    exhaustion: Exhaustion,
    multiplier: u64,
    offset: u64,
    cursor: AtomicU64,
}

impl SeedSequence {
    /// Creates a scrambled, failing sequence over `range`.
    pub fn new(master: u64, range: SeedRange) -> Self {
        Self::with_options(master, range, SeedOrder::default(), Exhaustion::default())
    }

    /// Creates a sequence with explicit order and exhaustion policy.
    pub fn with_options(
        master: u64,
        range: SeedRange,
        order: SeedOrder,
        exhaustion: Exhaustion,
    ) -> Self {
        let (multiplier, offset) = permutation(master, range.size(), order);
        Self {
            master,
            range,
            order,
            exhaustion,
            multiplier,
            offset,
            cursor: AtomicU64::new(0),
        }
    }

    /// Returns a sequence with the same configuration and a fresh cursor.
    pub fn restarted(&self) -> Self {
        Self::with_options(self.master, self.range, self.order, self.exhaustion)
    }

    /// Master seed the permutation is derived from.
    #[inline]
    pub fn master(&self) -> u64 {
        self.master
    }

    /// Range the seeds are drawn from.
    #[inline]
    pub fn range(&self) -> SeedRange {
        self.range
    }

    /// Walk order.
    #[inline]
    pub fn order(&self) -> SeedOrder {
        self.order
    }

    /// Exhaustion policy.
    #[inline]
    pub fn exhaustion(&self) -> Exhaustion {
        self.exhaustion
    }

    /// Seed at position `index` of the stream, independent of the cursor.
    ///
    /// Indices past the range size wrap around the permutation.
    pub fn seed_at(&self, index: u64) -> i32 {
        let size = self.range.size();
        let n = u128::from(index % size);
        let offset = (n * u128::from(self.multiplier) + u128::from(self.offset))
            % u128::from(size);
        self.range.at(offset as u64)
    }

    fn reserve(&self, count: u64) -> Result<u64> {
        let size = self.range.size();
        match self.exhaustion {
            Exhaustion::Fail => self
                .cursor
                .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |cursor| {
                    cursor.checked_add(count).filter(|&end| end <= size)
                })
                .map_err(|_| RandGenError::SeedSpaceExhausted {
                    space: size,
                    requested: count,
                }),
            Exhaustion::Wrap => {
                let start = self.cursor.fetch_add(count, Ordering::Relaxed);
                if start / size != (start + count - 1) / size {
                    warn!(
                        space = size,
                        emitted = start + count,
                        "seed space wrapped; seeds repeat from here on"
                    );
                }
                Ok(start)
            }
        }
    }
}

impl SeedSource for SeedSequence {
    fn fill_seeds(&self, seeds: &mut [i32]) -> Result<()> {
        if seeds.is_empty() {
            return Ok(());
        }
        let start = self.reserve(seeds.len() as u64)?;
        for (i, seed) in seeds.iter_mut().enumerate() {
            *seed = self.seed_at(start + i as u64);
        }
        Ok(())
    }

    fn emitted(&self) -> u64 {
        self.cursor.load(Ordering::Relaxed)
    }
}

/// Derives `(multiplier, offset)` of the affine permutation of `[0, size)`.
fn permutation(master: u64, size: u64, order: SeedOrder) -> (u64, u64) {
    match order {
        SeedOrder::Sequential => (1, master % size),
        SeedOrder::Scrambled => {
            let offset = splitmix64(master) % size;
            let mut multiplier = splitmix64(master ^ 0xA076_1D64_78BD_642F) % size;
            // Walk to the next unit of Z/size; 1 is always one.
            while multiplier == 0 || gcd(multiplier, size) != 1 {
                multiplier = if multiplier + 1 >= size { 1 } else { multiplier + 1 };
            }
            (multiplier, offset)
        }
    }
}

/// SplitMix64 finaliser (Steele, Lea and Flood, 2014).
fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn range(low: i32, high: i32) -> SeedRange {
        SeedRange::new(low, high).unwrap()
    }

    #[test]
    fn test_same_master_same_sequence() {
        let a = SeedSequence::new(2024, SeedRange::FULL);
        let b = SeedSequence::new(2024, SeedRange::FULL);
        for _ in 0..1_000 {
            assert_eq!(a.next_seed().unwrap(), b.next_seed().unwrap());
        }
    }

    #[test]
    fn test_different_masters_differ() {
        let a = SeedSequence::new(1, SeedRange::FULL);
        let b = SeedSequence::new(2, SeedRange::FULL);
        let seeds_a: Vec<i32> = (0..10).map(|_| a.next_seed().unwrap()).collect();
        let seeds_b: Vec<i32> = (0..10).map(|_| b.next_seed().unwrap()).collect();
        assert_ne!(seeds_a, seeds_b);
    }

    #[test]
    fn test_no_collisions_in_large_run() {
        let source = SeedSequence::new(7, range(1, 2_147_483_398));
        let mut seen = HashSet::new();
        for _ in 0..100_000 {
            let seed = source.next_seed().unwrap();
            assert!(seen.insert(seed), "seed {} repeated", seed);
        }
    }

    #[test]
    fn test_small_range_is_full_permutation_then_fails() {
        let source = SeedSequence::new(99, range(10, 29));
        let mut seeds: Vec<i32> = (0..20).map(|_| source.next_seed().unwrap()).collect();
        seeds.sort_unstable();
        assert_eq!(seeds, (10..30).collect::<Vec<_>>());

        let err = source.next_seed().unwrap_err();
        assert_eq!(
            err,
            RandGenError::SeedSpaceExhausted {
                space: 20,
                requested: 1
            }
        );
        assert_eq!(source.emitted(), 20);
    }

    #[test]
    fn test_failed_block_request_leaves_cursor() {
        let source = SeedSequence::new(3, range(0, 4));
        let mut block = [0; 4];
        source.fill_seeds(&mut block).unwrap();

        let mut pair = [0; 2];
        assert!(source.fill_seeds(&mut pair).is_err());
        assert_eq!(source.emitted(), 4);
        assert_eq!(pair, [0, 0]);

        let last = source.next_seed().unwrap();
        assert!(!block.contains(&last));
        assert_eq!(source.emitted(), 5);
    }

    #[test]
    fn test_wrap_repeats_cycle() {
        let source =
            SeedSequence::with_options(5, range(0, 2), SeedOrder::Scrambled, Exhaustion::Wrap);
        let seeds: Vec<i32> = (0..6).map(|_| source.next_seed().unwrap()).collect();
        assert_eq!(&seeds[..3], &seeds[3..]);
        assert_eq!(source.emitted(), 6);
    }

    #[test]
    fn test_sequential_order() {
        let source =
            SeedSequence::with_options(5, range(0, 9), SeedOrder::Sequential, Exhaustion::Wrap);
        let seeds: Vec<i32> = (0..8).map(|_| source.next_seed().unwrap()).collect();
        assert_eq!(seeds, vec![5, 6, 7, 8, 9, 0, 1, 2]);
    }

    #[test]
    fn test_seed_at_matches_stream() {
        let source = SeedSequence::new(11, range(-1_000, 1_000));
        let mut block = [0; 16];
        source.fill_seeds(&mut block).unwrap();
        for (i, &seed) in block.iter().enumerate() {
            assert_eq!(seed, source.seed_at(i as u64));
        }
    }

    #[test]
    fn test_restarted_replays() {
        let source = SeedSequence::new(77, SeedRange::FULL);
        let first: Vec<i32> = (0..5).map(|_| source.next_seed().unwrap()).collect();

        let fresh = source.restarted();
        assert_eq!(fresh.emitted(), 0);
        let again: Vec<i32> = (0..5).map(|_| fresh.next_seed().unwrap()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_multiplier_is_unit() {
        for &size in &[1_u64, 2, 12, 97, 1 << 32, 899_999_963, 2_147_483_398] {
            for master in 0..20 {
                let (multiplier, offset) = permutation(master, size, SeedOrder::Scrambled);
                assert_eq!(gcd(multiplier, size), 1, "size {}", size);
                assert!(multiplier >= 1 && (multiplier < size || size == 1));
                assert!(offset < size);
            }
        }
    }

    #[test]
    fn test_concurrent_emission_is_collision_free() {
        let source = Arc::new(SeedSequence::new(123, SeedRange::FULL));

        let emitted: Vec<i32> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let source = Arc::clone(&source);
                    scope.spawn(move || {
                        (0..1_000)
                            .map(|_| source.next_seed().unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|handle| handle.join().unwrap())
                .collect()
        });

        let unique: HashSet<i32> = emitted.iter().copied().collect();
        assert_eq!(unique.len(), 8_000);

        let expected: HashSet<i32> = (0..8_000).map(|i| source.seed_at(i)).collect();
        assert_eq!(unique, expected);
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("Sequential".parse::<SeedOrder>().unwrap(), SeedOrder::Sequential);
        assert_eq!("wrap".parse::<Exhaustion>().unwrap(), Exhaustion::Wrap);
        assert!("shuffled".parse::<SeedOrder>().is_err());
        assert!("panic".parse::<Exhaustion>().is_err());
        assert_eq!(SeedOrder::Scrambled.to_string(), "scrambled");
        assert_eq!(Exhaustion::Fail.to_string(), "fail");
    }
}
