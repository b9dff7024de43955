//! Deterministic RNG for field generation. Not cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    /// Uniform in `[0, 1)` from 24 bits of mantissa.
    fn next_f32_unit(&mut self) -> f32 {
        let x = self.next_u32() >> 8;
        (x as f32) / ((1u32 << 24) as f32)
    }

    /// Uniform in `[min, max)`. Returns `min` when the range is empty or inverted.
    fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min.is_nan() || max.is_nan() || max <= min {
            return min;
        }
        min + (max - min) * self.next_f32_unit()
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

/// SplitMix64: small, fast, and reproducible across platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SplitMix64::new(7);
        let mut b = SplitMix64::new(7);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn range_stays_in_bounds() {
        let mut rng = SplitMix64::new(42);
        for _ in 0..1000 {
            let x = rng.range_f32(-2.0, 3.0);
            assert!((-2.0..3.0).contains(&x));
        }
        assert_eq!(rng.range_f32(1.0, 1.0), 1.0);
        assert_eq!(rng.range_f32(2.0, 1.0), 2.0);
    }
}
