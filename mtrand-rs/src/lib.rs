//! # mtrand: Reproducible Uniform, Normal and Exponential PRNGs
//!
//! A Mersenne Twister (MT19937) engine with the reference uniform
//! conversions, plus normal and exponential variates drawn by transformed
//! density rejection with proportional squeeze (TDR-PS).
//!
//! ## Acknowledgements
//!
//! MT19937 with the 2002 initialisation is due to Makoto Matsumoto and Takuji
//! Nishimura (3-clause BSD). The TDR-PS calibration tables were generated with
//! ANURAN by Wolfgang Hoermann and Josef Leydold.
//!
//! ## Reproducibility
//!
//! Two generators seeded identically produce bit-identical output under every
//! draw operation. A generator that is never seeded behaves as if seeded with
//! 5489 on its first draw, which reproduces the published MT19937 reference
//! sequence.
//!
//! Normal and exponential draws are standard (mean 0 / variance 1 and rate 1).
//! Apply location and scale outside the generator.

mod constants;
mod mt19937;
pub mod tables;
mod tdr;

use constants::*;
pub use constants::{ARRAY_SEED, DEFAULT_SEED};
pub use mt19937::Mt19937;

use crate::tables::{EXPONENTIAL, NORMAL};

/// Main generator: an MT19937 stream plus the non-uniform samplers
#[derive(Debug, Clone, Default)]
pub struct MtRand {
    rng: Mt19937,
}

impl MtRand {
    /// Create a new generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Mt19937::with_seed(seed),
        }
    }

    /// Create a new generator seeded from a key sequence
    pub fn from_key(key: &[u32]) -> Self {
        Self {
            rng: Mt19937::with_key(key),
        }
    }

    /// Reseed in place
    #[inline]
    pub fn seed(&mut self, seed: u32) {
        self.rng.seed(seed);
    }

    /// Reseed in place from a key sequence
    #[inline]
    pub fn seed_by_array(&mut self, key: &[u32]) {
        self.rng.seed_by_array(key);
    }

    /// Get a random 32-bit unsigned integer
    #[inline]
    pub fn rand32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Get a random 31-bit unsigned integer
    #[inline]
    pub fn rand31(&mut self) -> u32 {
        self.rng.next_u31()
    }

    /// Uniform on [0, 1]
    #[inline]
    pub fn uniform_closed(&mut self) -> f64 {
        self.rand32() as f64 * INV_2POW32_MINUS_1
    }

    /// Uniform on [0, 1)
    #[inline]
    pub fn uniform_half_open(&mut self) -> f64 {
        self.rand32() as f64 * INV_2POW32
    }

    /// Uniform on (0, 1)
    #[inline]
    pub fn uniform_open(&mut self) -> f64 {
        (self.rand32() as f64 + 0.5) * INV_2POW32
    }

    /// Uniform on [0, 1) with 53-bit resolution, from two draws
    #[inline]
    pub fn uniform_res53(&mut self) -> f64 {
        let a = self.rand32() >> 5;
        let b = self.rand32() >> 6;
        (a as f64 * TWO_POW26 + b as f64) * INV_2POW53
    }

    /// Generate a standard normal variate (mean 0, variance 1)
    #[inline]
    pub fn normal(&mut self) -> f64 {
        NORMAL.sample(self)
    }

    /// Generate a standard exponential variate (rate 1)
    #[inline]
    pub fn exponential(&mut self) -> f64 {
        EXPONENTIAL.sample(self)
    }

    /// Fill `out` with values from [`uniform_closed`](Self::uniform_closed)
    pub fn fill_uniform(&mut self, out: &mut [f64]) {
        for v in out {
            *v = self.uniform_closed();
        }
    }

    /// Fill `out` with standard normal variates
    pub fn fill_normal(&mut self, out: &mut [f64]) {
        for v in out {
            *v = self.normal();
        }
    }

    /// Fill `out` with standard exponential variates
    pub fn fill_exponential(&mut self, out: &mut [f64]) {
        for v in out {
            *v = self.exponential();
        }
    }
}

impl rand::RngCore for MtRand {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.rand32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        rand::RngCore::next_u64(&mut self.rng)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        rand::RngCore::fill_bytes(&mut self.rng, dst)
    }
}

impl rand::SeedableRng for MtRand {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
