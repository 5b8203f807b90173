//! Log-domain summation: `ln(e^a + e^b)` without overflow or underflow.
//!
//! `log_sum(a, b) = max(a, b) + L(|a - b|)` with the correction
//! `L(z) = ln(1 + e^-z)`. [`correction_exact`] evaluates `L` directly;
//! [`LogSumTable`] replaces it by piecewise quadratics in `y = 1/(1+z)`,
//! fitted once on Chebyshev nodes.

use crate::aligned::{AlignedBuf, CACHE_LINE};
use crate::config::{DEG, LogSumConfig, NCOEFFS};
use crate::error::{LogDomainError, Result};
use crate::interpolate::PolyFitter;
use std::f64::consts::{LN_2, PI};
use std::time::Instant;
use tracing::debug;

/// `ln(1 + e^-z)` for `z >= 0`.
#[inline]
pub fn correction_exact(z: f64) -> f64 {
    let x = (-z).exp();
    let y = 1.0 + x;
    // (y - 1) - x is the rounding error of 1 + x under IEEE arithmetic
    y.ln() - ((y - 1.0) - x) / y
}

/// Order the pair as `(max, |a - b|)`; `None` when the difference is NaN.
#[inline]
fn split(a: f64, b: f64) -> Option<(f64, f64)> {
    let mut x = a - b;
    let mut m = a;
    if x < 0.0 {
        x = -x;
        m = b;
    }
    if x.is_nan() { None } else { Some((m, x)) }
}

/// Result for pairs whose difference is NaN: equal infinities or a NaN input
#[inline]
fn degenerate(a: f64, b: f64) -> f64 {
    if a == b { a } else { f64::NAN }
}

/// `ln(e^a + e^b)` using [`correction_exact`].
#[inline]
pub fn log_sum_exact(a: f64, b: f64) -> f64 {
    match split(a, b) {
        Some((m, z)) => m + correction_exact(z),
        None => degenerate(a, b),
    }
}

/// Evaluator of the log-sum correction.
pub trait LogSum {
    /// `ln(1 + e^-z)` for `z >= 0`
    fn correction(&self, z: f64) -> f64;

    /// `ln(e^a + e^b)`
    #[inline]
    fn log_sum(&self, a: f64, b: f64) -> f64 {
        match split(a, b) {
            Some((m, z)) => m + self.correction(z),
            None => degenerate(a, b),
        }
    }
}

/// The direct evaluator; valid for every `z >= 0` and needs no setup.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl LogSum for Exact {
    #[inline]
    fn correction(&self, z: f64) -> f64 {
        correction_exact(z)
    }
}

/// Piecewise-quadratic table for the log-sum correction.
///
/// Built once, immutable afterwards and safe to share between threads.
/// Dropping the table (or calling [`release`](Self::release)) frees it.
#[derive(Debug)]
pub struct LogSumTable {
    cof: AlignedBuf<[f64; NCOEFFS]>,
    panels: usize,
}

impl LogSumTable {
    /// Build the default table of [`NUMPANELS`](crate::NUMPANELS) panels.
    pub fn build() -> Result<Self> {
        Self::build_with(&LogSumConfig::default())
    }

    /// Build a table with the given configuration.
    ///
    /// On error nothing is returned; a partially filled buffer is freed.
    pub fn build_with(config: &LogSumConfig) -> Result<Self> {
        config.validate()?;
        let panels = config.panels;
        let start = Instant::now();
        debug!(panels, bytes = config.table_bytes(), "building log-sum table");

        let len = panels
            .checked_add(1)
            .ok_or(LogDomainError::AllocationFailure {
                bytes: config.table_bytes(),
            })?;
        let mut cof: AlignedBuf<[f64; NCOEFFS]> = AlignedBuf::try_new(len, CACHE_LINE)?;

        // Chebyshev nodes on [-1, 1]
        let mut nodes = [0.0; NCOEFFS];
        for (i, node) in nodes.iter_mut().enumerate() {
            *node = ((2 * i + 1) as f64 * PI / (2 * DEG + 2) as f64).cos();
        }

        let mut fitter = PolyFitter::new();
        let mut xa = [0.0; NCOEFFS];
        let mut ya = [0.0; NCOEFFS];
        for j in 0..panels {
            let a = j as f64 / panels as f64;
            let b = (j + 1) as f64 / panels as f64;
            for i in 0..NCOEFFS {
                xa[i] = 0.5 * ((b - a) * nodes[i] + a + b);
                ya[i] = correction_exact(1.0 / xa[i] - 1.0);
            }
            fitter.coefficients_into(&xa, &ya, &mut cof[j])?;
        }

        // z = 0: L(0) = ln 2 exactly
        let mut last = [0.0; NCOEFFS];
        last[0] = LN_2;
        cof[panels] = last;

        debug!(
            panels,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "log-sum table ready"
        );
        Ok(Self { cof, panels })
    }

    /// Number of fitted panels (the closing `z = 0` panel excluded)
    #[inline]
    pub fn panels(&self) -> usize {
        self.panels
    }

    /// Coefficients of panel `j`, lowest power first
    #[inline]
    pub fn panel(&self, j: usize) -> &[f64; NCOEFFS] {
        &self.cof[j]
    }

    /// Bytes held by the coefficient buffer
    #[inline]
    pub fn bytes(&self) -> usize {
        self.cof.bytes()
    }

    /// Free the table. Equivalent to dropping it.
    pub fn release(self) {
        debug!(panels = self.panels, "releasing log-sum table");
        drop(self);
    }
}

impl LogSum for LogSumTable {
    #[inline]
    fn correction(&self, z: f64) -> f64 {
        debug_assert!(z >= 0.0 || z.is_nan(), "log-sum correction needs z >= 0, got {z}");
        let y = 1.0 / (1.0 + z);
        let idx = ((self.panels as f64 * y) as usize).min(self.panels);
        let coeff = &self.cof[idx];

        let mut temp = coeff[DEG];
        for i in (0..DEG).rev() {
            temp = temp * y + coeff[i];
        }
        temp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn small_table() -> LogSumTable {
        LogSumTable::build_with(&LogSumConfig::default().with_panels(10_000)).unwrap()
    }

    #[test]
    fn test_correction_exact_values() {
        assert_abs_diff_eq!(correction_exact(0.0), LN_2, epsilon = 1e-15);
        assert_abs_diff_eq!(correction_exact(1.0), (1.0 + (-1.0f64).exp()).ln(), epsilon = 1e-15);
        assert_abs_diff_eq!(correction_exact(40.0), (-40.0f64).exp(), epsilon = 1e-30);
        assert_eq!(correction_exact(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_log_sum_exact_basics() {
        assert_abs_diff_eq!(log_sum_exact(0.0, 0.0), LN_2, epsilon = 1e-15);
        assert_abs_diff_eq!(
            log_sum_exact(2.0f64.ln(), 3.0f64.ln()),
            5.0f64.ln(),
            epsilon = 1e-14
        );
        // No overflow where exp() would
        assert_abs_diff_eq!(log_sum_exact(1000.0, 1000.0), 1000.0 + LN_2, epsilon = 1e-12);
        // No underflow where exp() would
        assert_abs_diff_eq!(
            log_sum_exact(-1000.0, -1001.0),
            -1000.0 + correction_exact(1.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_log_sum_infinities() {
        let ninf = f64::NEG_INFINITY;
        assert_eq!(log_sum_exact(ninf, 3.0), 3.0);
        assert_eq!(log_sum_exact(3.0, ninf), 3.0);
        assert_eq!(log_sum_exact(ninf, ninf), ninf);
        assert_eq!(log_sum_exact(f64::INFINITY, f64::INFINITY), f64::INFINITY);
        assert!(log_sum_exact(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn test_table_shape() {
        let table = small_table();
        assert_eq!(table.panels(), 10_000);
        assert_eq!(table.panel(10_000), &[LN_2, 0.0, 0.0]);
        assert_eq!(table.bytes(), 10_001 * 24);
        assert_eq!(table.correction(0.0), LN_2);
    }

    #[test]
    fn test_zero_panels_rejected() {
        let r = LogSumTable::build_with(&LogSumConfig::default().with_panels(0));
        assert!(matches!(r, Err(LogDomainError::InvalidParameter { .. })));
    }

    #[test]
    fn test_oversized_panel_count_fails_cleanly() {
        for panels in [usize::MAX, usize::MAX / 2, usize::MAX / 24] {
            let r = LogSumTable::build_with(&LogSumConfig::default().with_panels(panels));
            assert!(
                matches!(r, Err(LogDomainError::AllocationFailure { .. })),
                "panels = {} should not allocate",
                panels
            );
        }
    }

    #[test]
    fn test_default_table_matches_exact() {
        let table = LogSumTable::build().unwrap();
        assert_eq!(table.panels(), crate::NUMPANELS);
        let n = 200_000;
        for k in 0..=n {
            let z = 20.0 * k as f64 / n as f64;
            let fast = table.correction(z);
            let exact = correction_exact(z);
            assert!(
                (fast - exact).abs() < 1e-9,
                "z = {}: table {} vs exact {}",
                z,
                fast,
                exact
            );
        }
        table.release();
    }

    #[test]
    fn test_table_log_sum_far_apart() {
        let table = small_table();
        assert_abs_diff_eq!(table.log_sum(0.0, -800.0), 0.0, epsilon = 1e-12);
        // Panel 0 holds z >= 1e4, where the correction is exactly zero
        assert_eq!(table.panel(0), &[0.0; NCOEFFS]);
        assert_eq!(table.log_sum(f64::NEG_INFINITY, -2.0), -2.0);
        assert_eq!(table.log_sum(f64::NEG_INFINITY, f64::NEG_INFINITY), f64::NEG_INFINITY);
    }

    #[test]
    fn test_exact_trait_matches_free_fn() {
        for (a, b) in [(1.0, 2.0), (-3.5, 7.25), (0.0, -0.0)] {
            assert_eq!(Exact.log_sum(a, b).to_bits(), log_sum_exact(a, b).to_bits());
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn test_log_sum_commutative(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            prop_assert_eq!(log_sum_exact(a, b).to_bits(), log_sum_exact(b, a).to_bits());
        }

        #[test]
        fn test_log_sum_self(a in -1.0e3f64..1.0e3) {
            prop_assert!((log_sum_exact(a, a) - (a + LN_2)).abs() <= 1e-12);
        }

        #[test]
        fn test_log_sum_bounds(a in -50.0f64..50.0, b in -50.0f64..50.0) {
            let s = log_sum_exact(a, b);
            prop_assert!(s >= a.max(b));
            prop_assert!(s <= a.max(b) + LN_2 + 1e-15);
        }
    }
}
