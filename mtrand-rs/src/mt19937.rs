//! MT19937 (Mersenne Twister) PRNG
//!
//! By Makoto Matsumoto and Takuji Nishimura, with the 2002 initialisation.
//! Period 2^19937 - 1, 32-bit output.

use crate::constants::*;

/// Cursor value meaning "never seeded"
const UNSEEDED: usize = MT_N + 1;

/// MT19937 generator state
#[derive(Clone)]
pub struct Mt19937 {
    mt: [u32; MT_N],
    mti: usize,
}

impl Mt19937 {
    /// Create a new unseeded context. The first draw applies [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self {
            mt: [0; MT_N],
            mti: UNSEEDED,
        }
    }

    /// Create a context seeded with `seed`
    pub fn with_seed(seed: u32) -> Self {
        let mut rng = Self::new();
        rng.seed(seed);
        rng
    }

    /// Create a context seeded from a key sequence
    pub fn with_key(key: &[u32]) -> Self {
        let mut rng = Self::new();
        rng.seed_by_array(key);
        rng
    }

    /// Seed the generator with a single word
    pub fn seed(&mut self, seed: u32) {
        self.mt[0] = seed;
        for i in 1..MT_N {
            let prev = self.mt[i - 1];
            self.mt[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.mti = MT_N;
    }

    /// Seed the generator from a key of arbitrary length.
    ///
    /// Every word of the key affects the whole state. An empty key is
    /// treated as `[0]`.
    pub fn seed_by_array(&mut self, key: &[u32]) {
        let key: &[u32] = if key.is_empty() { &[0] } else { key };

        self.seed(ARRAY_SEED);

        let mut i = 1;
        let mut j = 0;
        for _ in 0..MT_N.max(key.len()) {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(ARRAY_MULTIPLIER_1))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= MT_N {
                self.mt[0] = self.mt[MT_N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..MT_N - 1 {
            let prev = self.mt[i - 1];
            self.mt[i] = (self.mt[i] ^ (prev ^ (prev >> 30)).wrapping_mul(ARRAY_MULTIPLIER_2))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= MT_N {
                self.mt[0] = self.mt[MT_N - 1];
                i = 1;
            }
        }

        // MSB is 1, so the initial array is never all zero
        self.mt[0] = 0x8000_0000;
    }

    /// True once the state has been seeded, explicitly or by a first draw
    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.mti != UNSEEDED
    }

    #[inline]
    fn twist_word(upper: u32, lower: u32, feed: u32) -> u32 {
        let y = (upper & UPPER_MASK) | (lower & LOWER_MASK);
        let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
        feed ^ (y >> 1) ^ mag
    }

    /// Generate the next block of 624 words
    fn twist(&mut self) {
        if self.mti == UNSEEDED {
            tracing::trace!(seed = DEFAULT_SEED, "mt19937 drawn before seeding");
            self.seed(DEFAULT_SEED);
        }

        let mut kk = 0;
        while kk < MT_N - MT_M {
            self.mt[kk] = Self::twist_word(self.mt[kk], self.mt[kk + 1], self.mt[kk + MT_M]);
            kk += 1;
        }
        while kk < MT_N - 1 {
            self.mt[kk] = Self::twist_word(self.mt[kk], self.mt[kk + 1], self.mt[kk + MT_M - MT_N]);
            kk += 1;
        }
        self.mt[MT_N - 1] = Self::twist_word(self.mt[MT_N - 1], self.mt[0], self.mt[MT_M - 1]);

        self.mti = 0;
    }

    /// Get the next tempered word on [0, 0xffffffff]
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        if self.mti >= MT_N {
            self.twist();
        }
        let mut y = self.mt[self.mti];
        self.mti += 1;

        y ^= y >> 11;
        y ^= (y << 7) & TEMPER_B;
        y ^= (y << 15) & TEMPER_C;
        y ^= y >> 18;
        y
    }

    /// Get the next word on [0, 0x7fffffff]
    #[inline]
    pub fn next_u31(&mut self) -> u32 {
        self.next_u32() >> 1
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937")
            .field("mti", &self.mti)
            .field("seeded", &self.is_seeded())
            .finish_non_exhaustive()
    }
}

impl rand::RngCore for Mt19937 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Mt19937::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        rand::rand_core::impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dst)
    }
}

impl rand::SeedableRng for Mt19937 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_seed(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed_reference_vector() {
        let mut rng = Mt19937::new();
        let expected = [3499211612u32, 581869302, 3890346734, 3586334585, 545404204];
        for &e in &expected {
            assert_eq!(rng.next_u32(), e);
        }
    }

    #[test]
    fn test_explicit_default_seed_matches_lazy() {
        let mut lazy = Mt19937::new();
        let mut seeded = Mt19937::with_seed(DEFAULT_SEED);
        for _ in 0..2000 {
            assert_eq!(lazy.next_u32(), seeded.next_u32());
        }
    }

    #[test]
    fn test_init_by_array_reference_vector() {
        let mut rng = Mt19937::with_key(&[0x123, 0x234, 0x345, 0x456]);
        let expected = [1067595299u32, 955945823, 477289528, 4107218783, 4228976476];
        for &e in &expected {
            assert_eq!(rng.next_u32(), e);
        }
    }

    #[test]
    fn test_mt_deterministic() {
        let mut rng1 = Mt19937::with_seed(42);
        let mut rng2 = Mt19937::with_seed(42);

        for _ in 0..10_000 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_mt_different_seeds() {
        let mut rng1 = Mt19937::with_seed(42);
        let mut rng2 = Mt19937::with_seed(43);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_next_u31_drops_top_bit() {
        let mut rng1 = Mt19937::with_seed(7);
        let mut rng2 = Mt19937::with_seed(7);
        for _ in 0..1000 {
            let y = rng2.next_u31();
            assert!(y <= 0x7fff_ffff);
            assert_eq!(rng1.next_u32() >> 1, y);
        }
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let mut rng = Mt19937::with_seed(99);
        let first: Vec<u32> = (0..700).map(|_| rng.next_u32()).collect();
        rng.seed(99);
        let second: Vec<u32> = (0..700).map(|_| rng.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_key_is_single_zero() {
        let mut rng1 = Mt19937::with_key(&[]);
        let mut rng2 = Mt19937::with_key(&[0]);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_long_key_changes_stream() {
        let key: Vec<u32> = (0..1000).collect();
        let mut rng1 = Mt19937::with_key(&key);
        let mut key2 = key.clone();
        key2[999] = 1;
        let mut rng2 = Mt19937::with_key(&key2);
        let a: Vec<u32> = (0..16).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..16).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rand_core_interop() {
        use rand::{Rng, RngCore, SeedableRng};

        let mut rng = Mt19937::from_seed(42u32.to_le_bytes());
        let mut reference = Mt19937::with_seed(42);
        assert_eq!(RngCore::next_u32(&mut rng), reference.next_u32());

        let lo = reference.next_u32() as u64;
        let hi = reference.next_u32() as u64;
        assert_eq!(RngCore::next_u64(&mut rng), (hi << 32) | lo);

        for _ in 0..1000 {
            let x: f64 = rng.random();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
