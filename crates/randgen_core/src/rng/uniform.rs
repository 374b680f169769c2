//! The uniform generator capability shared by every algorithm.

use rand_distr::{Distribution, StandardNormal};

use super::adapter::RngAdapter;
use crate::error::{RandGenError, Result};

/// Source of uniformly distributed `f64` values in the half-open interval
/// [0, 1).
///
/// Implementors only have to supply [`draw_one`](Self::draw_one). Algorithms
/// override [`fill`](Self::fill) with a tight loop over their own state
/// transition; an override must stay observably identical to repeated
/// `draw_one` calls.
///
/// Instances are single-owner: every draw takes `&mut self` and mutates the
/// state in place. Use one generator per worker.
///
/// # Examples
///
/// ```rust
/// use randgen_core::rng::{Ranecu, UniformGenerator};
///
/// let mut single = Ranecu::new(1, 1);
/// let mut bulk = Ranecu::new(1, 1);
///
/// let mut buffer = [0.0; 8];
/// bulk.draw_many(&mut buffer, 8).unwrap();
///
/// for &value in &buffer {
///     assert_eq!(value, single.draw_one());
/// }
/// ```
pub trait UniformGenerator {
    /// Draws one value uniformly distributed over [0, 1).
    fn draw_one(&mut self) -> f64;

    /// Fills every slot of `buffer` with successive draws.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    fn fill(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.draw_one();
        }
    }

    /// Fills the first `count` slots of `buffer` with successive draws.
    ///
    /// # Errors
    ///
    /// Returns [`RandGenError::BufferTooSmall`] when `buffer` holds fewer
    /// than `count` slots. The check happens before any draw, so the
    /// generator state and the buffer are left untouched.
    fn draw_many(&mut self, buffer: &mut [f64], count: usize) -> Result<()> {
        let capacity = buffer.len();
        let slots = buffer
            .get_mut(..count)
            .ok_or(RandGenError::BufferTooSmall {
                requested: count,
                capacity,
            })?;
        self.fill(slots);
        Ok(())
    }

    /// Draws a value uniformly distributed over [lo, hi).
    #[inline]
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.draw_one()
    }

    /// Draws an index uniformly from [0, hi).
    ///
    /// Returns 0 without consuming a draw when `hi` is 0.
    fn choose(&mut self, hi: usize) -> usize {
        if hi == 0 {
            return 0;
        }
        let index = (self.draw_one() * hi as f64) as usize;
        // Rounding can reach `hi` once it exceeds 2^53.
        index.min(hi - 1)
    }

    /// Draws an integer uniformly from [lo, hi).
    ///
    /// Returns `lo` without consuming a draw when the range is empty.
    fn choose_range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = i64::from(hi) - i64::from(lo);
        let offset = ((self.draw_one() * span as f64) as i64).min(span - 1);
        (i64::from(lo) + offset) as i32
    }

    /// Fair coin toss.
    #[inline]
    fn coin(&mut self) -> bool {
        self.draw_one() < 0.5
    }

    /// Biased coin toss, `true` with probability `p`.
    ///
    /// `p <= 0` never succeeds and `p >= 1` always does.
    #[inline]
    fn coin_with(&mut self, p: f64) -> bool {
        self.draw_one() < p
    }

    /// Draws a standard normal variate (mean 0, standard deviation 1).
    ///
    /// Samples `rand_distr::StandardNormal` (Ziggurat) through
    /// [`RngAdapter`], so the number of uniform draws consumed varies.
    fn gaussian(&mut self) -> f64
    where
        Self: Sized,
    {
        StandardNormal.sample(&mut RngAdapter::new(self))
    }

    /// Shuffles `items` in place (Fisher-Yates).
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.choose(i + 1);
            items.swap(i, j);
        }
    }

    /// Borrows the generator as a [`rand::RngCore`].
    #[inline]
    fn as_rng(&mut self) -> RngAdapter<'_, Self>
    where
        Self: Sized,
    {
        RngAdapter::new(self)
    }
}

impl<G: UniformGenerator + ?Sized> UniformGenerator for &mut G {
    #[inline]
    fn draw_one(&mut self) -> f64 {
        (**self).draw_one()
    }

    #[inline]
    fn fill(&mut self, buffer: &mut [f64]) {
        (**self).fill(buffer)
    }
}

impl<G: UniformGenerator + ?Sized> UniformGenerator for Box<G> {
    #[inline]
    fn draw_one(&mut self) -> f64 {
        (**self).draw_one()
    }

    #[inline]
    fn fill(&mut self, buffer: &mut [f64]) {
        (**self).fill(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of draws, cycling.
    struct Scripted {
        values: Vec<f64>,
        next: usize,
    }

    impl Scripted {
        fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl UniformGenerator for Scripted {
        fn draw_one(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn test_draw_many_rejects_short_buffer_without_drawing() {
        let mut gen = Scripted::new(&[0.25]);
        let mut buffer = [7.0; 3];

        let err = gen.draw_many(&mut buffer, 4).unwrap_err();
        assert_eq!(
            err,
            RandGenError::BufferTooSmall {
                requested: 4,
                capacity: 3
            }
        );
        assert_eq!(buffer, [7.0; 3]);
        assert_eq!(gen.next, 0);
    }

    #[test]
    fn test_draw_many_fills_prefix_only() {
        let mut gen = Scripted::new(&[0.1, 0.2, 0.3]);
        let mut buffer = [9.0; 5];

        gen.draw_many(&mut buffer, 2).unwrap();
        assert_eq!(buffer, [0.1, 0.2, 9.0, 9.0, 9.0]);

        gen.draw_many(&mut buffer, 0).unwrap();
        assert_eq!(gen.next, 2);
    }

    #[test]
    fn test_choose_bounds() {
        let mut gen = Scripted::new(&[0.0, 0.999_999_999_9, 0.5]);
        assert_eq!(gen.choose(10), 0);
        assert_eq!(gen.choose(10), 9);
        assert_eq!(gen.choose(10), 5);

        // Empty range consumes nothing.
        assert_eq!(gen.choose(0), 0);
        assert_eq!(gen.next, 3);
    }

    #[test]
    fn test_choose_range_handles_full_i32_span() {
        let mut gen = Scripted::new(&[0.0, 0.999_999_999_999, 0.5]);
        assert_eq!(gen.choose_range(i32::MIN, i32::MAX), i32::MIN);
        assert_eq!(gen.choose_range(i32::MIN, i32::MAX), i32::MAX - 1);
        assert_eq!(gen.choose_range(-10, 10), 0);
        assert_eq!(gen.choose_range(5, 5), 5);
    }

    #[test]
    fn test_uniform_and_coins() {
        let mut gen = Scripted::new(&[0.25, 0.75]);
        assert_eq!(gen.uniform(-2.0, 2.0), -1.0);
        assert_eq!(gen.uniform(10.0, 20.0), 17.5);

        assert!(gen.coin());
        assert!(!gen.coin());
        assert!(gen.coin_with(0.3));
        assert!(!gen.coin_with(0.7));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut gen = Scripted::new(&[0.9, 0.1, 0.5, 0.3]);
        let mut items: Vec<u32> = (0..16).collect();
        gen.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..16).collect::<Vec<_>>());
        assert_ne!(items, sorted);
    }

    #[test]
    fn test_forwarding_impls() {
        fn first_draw<G: UniformGenerator>(mut gen: G) -> f64 {
            gen.draw_one()
        }

        let mut gen = Scripted::new(&[0.5]);
        assert_eq!(first_draw(&mut gen), 0.5);
        assert_eq!(gen.next, 1);

        let mut boxed: Box<dyn UniformGenerator> = Box::new(Scripted::new(&[0.125]));
        let mut buffer = [0.0; 2];
        boxed.draw_many(&mut buffer, 2).unwrap();
        assert_eq!(buffer, [0.125, 0.125]);
    }
}
