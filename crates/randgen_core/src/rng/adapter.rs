//! Bridge from [`UniformGenerator`] to the `rand` ecosystem.

use rand::RngCore;

use super::uniform::UniformGenerator;

/// Width of the `u16` range as `f64`.
const U16_SPAN: f64 = 65_536.0;

/// Borrowing adapter exposing a [`UniformGenerator`] as a [`rand::RngCore`].
///
/// Each `next_u32` consumes two uniform draws and keeps the top 16 bits of
/// each. RANMAR draws carry only 24 significant bits and the low bits of a
/// scaled RANECU draw are strongly structured, so only leading bits are used.
/// With that, `rand` and `rand_distr` distributions can be sampled from any
/// of the generators.
///
/// # Examples
///
/// ```rust
/// use rand::Rng;
/// use randgen_core::rng::{Ranmar, UniformGenerator};
///
/// let mut gen = Ranmar::new(54321);
/// let roll: u8 = gen.as_rng().gen_range(1..=6);
/// assert!((1..=6).contains(&roll));
/// ```
pub struct RngAdapter<'a, G: ?Sized> {
    inner: &'a mut G,
}

impl<'a, G: UniformGenerator + ?Sized> RngAdapter<'a, G> {
    /// Wraps a mutable borrow of `inner`.
    #[inline]
    pub fn new(inner: &'a mut G) -> Self {
        Self { inner }
    }

    #[inline]
    fn leading_bits(&mut self) -> u32 {
        // Draws are strictly below 1.0, so the product stays below 2^16.
        (self.inner.draw_one() * U16_SPAN) as u32
    }
}

impl<G: UniformGenerator + ?Sized> RngCore for RngAdapter<'_, G> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let hi = self.leading_bits();
        let lo = self.leading_bits();
        (hi << 16) | lo
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{Ranecu, Ranmar};

    #[test]
    fn test_next_u32_packs_leading_bits() {
        let mut reference = Ranecu::new(1, 1);
        let mut gen = Ranecu::new(1, 1);
        let mut rng = RngAdapter::new(&mut gen);

        for _ in 0..100 {
            let hi = (reference.draw_one() * U16_SPAN) as u32;
            let lo = (reference.draw_one() * U16_SPAN) as u32;
            assert_eq!(rng.next_u32(), (hi << 16) | lo);
        }
    }

    #[test]
    fn test_next_u64_high_word_first() {
        let mut reference = Ranecu::new(12345, 67890);
        let hi = RngAdapter::new(&mut reference).next_u32();
        let lo = RngAdapter::new(&mut reference).next_u32();

        let mut gen = Ranecu::new(12345, 67890);
        let value = gen.as_rng().next_u64();
        assert_eq!(value, (u64::from(hi) << 32) | u64::from(lo));
    }

    #[test]
    fn test_fill_bytes_truncates_tail() {
        let mut reference = Ranecu::new(7, 11);
        let first = RngAdapter::new(&mut reference).next_u32().to_le_bytes();
        let second = RngAdapter::new(&mut reference).next_u32().to_le_bytes();

        let mut gen = Ranecu::new(7, 11);
        let mut bytes = [0u8; 6];
        gen.as_rng().fill_bytes(&mut bytes);

        assert_eq!(&bytes[..4], &first);
        assert_eq!(&bytes[4..], &second[..2]);
        // Exactly two words consumed.
        assert_eq!(gen, reference);
    }

    #[test]
    fn test_low_byte_varies_for_coarse_generator() {
        let mut gen = Ranmar::new(54321);
        let mut rng = gen.as_rng();
        let low_bytes: std::collections::HashSet<u8> =
            (0..1_000).map(|_| rng.next_u64() as u8).collect();
        assert!(low_bytes.len() > 200);
    }
}
