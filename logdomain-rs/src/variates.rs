//! Gamma, Beta and Dirichlet variates, returned as logarithms.
//!
//! Working in log space keeps tiny shape parameters usable: a Gamma(0.01)
//! draw routinely underflows as a plain `f64`, its logarithm does not.

use crate::error::{LogDomainError, Result};
use crate::logsum::{Exact, LogSum};
use mtrand_rs::MtRand;

#[inline]
fn check_shape(name: &'static str, a: f64) -> Result<()> {
    if a > 0.0 && a.is_finite() {
        Ok(())
    } else {
        Err(LogDomainError::InvalidParameter { name, value: a })
    }
}

/// Marsaglia and Tsang's squeeze method, valid for `a >= 1`.
///
/// "A simple method for generating gamma variables", ACM TOMS 26(3), 2000.
fn marsaglia_tsang(rng: &mut MtRand, a: f64) -> f64 {
    let d = a - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();
    loop {
        let (x, v) = loop {
            let x = rng.normal();
            let v = 1.0 + c * x;
            if v > 0.0 {
                break (x, v);
            }
        };
        let v = v * v * v;
        let u = rng.uniform_closed();
        if u < 1.0 - 0.0331 * (x * x) * (x * x) {
            return (d * v).ln();
        }
        if u.ln() < 0.5 * x * x + d * (1.0 - v + v.ln()) {
            return (d * v).ln();
        }
    }
}

/// Log of a Gamma(`a`, 1) variate.
///
/// For `a < 1` the draw is made at `a + 1` and corrected by
/// `ln U^(1/a) = -E/a` with `E` standard exponential.
pub fn log_gamma(rng: &mut MtRand, a: f64) -> Result<f64> {
    check_shape("shape", a)?;
    if a < 1.0 {
        let boosted = marsaglia_tsang(rng, a + 1.0);
        return Ok(boosted - rng.exponential() / a);
    }
    Ok(marsaglia_tsang(rng, a))
}

/// Log of a Beta(`a1`, `a2`) variate, combining with the exact log-sum.
pub fn log_beta(rng: &mut MtRand, a1: f64, a2: f64) -> Result<f64> {
    log_beta_with(rng, a1, a2, &Exact)
}

/// Log of a Beta(`a1`, `a2`) variate as `x1 - ln(e^x1 + e^x2)` with
/// `x1, x2` log-gamma draws.
pub fn log_beta_with<L: LogSum + ?Sized>(
    rng: &mut MtRand,
    a1: f64,
    a2: f64,
    summer: &L,
) -> Result<f64> {
    check_shape("alpha1", a1)?;
    check_shape("alpha2", a2)?;
    let x1 = log_gamma(rng, a1)?;
    let x2 = log_gamma(rng, a2)?;
    Ok(x1 - summer.log_sum(x1, x2))
}

/// Log of a Dirichlet(`alphas`) variate, combining with the exact log-sum.
pub fn dirichlet_log(rng: &mut MtRand, alphas: &[f64]) -> Result<Vec<f64>> {
    dirichlet_log_with(rng, alphas, &Exact)
}

/// Log of a Dirichlet(`alphas`) variate. The exponentials of the result
/// sum to one.
///
/// Every alpha is checked before anything is drawn, so a rejected call
/// leaves the generator untouched.
pub fn dirichlet_log_with<L: LogSum + ?Sized>(
    rng: &mut MtRand,
    alphas: &[f64],
    summer: &L,
) -> Result<Vec<f64>> {
    for &a in alphas {
        check_shape("alpha", a)?;
    }

    let mut x = Vec::with_capacity(alphas.len());
    let mut tot = f64::NEG_INFINITY;
    for (i, &a) in alphas.iter().enumerate() {
        let xi = log_gamma(rng, a)?;
        tot = if i == 0 { xi } else { summer.log_sum(tot, xi) };
        x.push(xi);
    }
    for xi in &mut x {
        *xi -= tot;
    }
    Ok(x)
}

/// Log-domain draws as methods on the generator.
pub trait LogVariates {
    fn log_gamma(&mut self, a: f64) -> Result<f64>;
    fn log_beta(&mut self, a1: f64, a2: f64) -> Result<f64>;
    fn dirichlet_log(&mut self, alphas: &[f64]) -> Result<Vec<f64>>;
}

impl LogVariates for MtRand {
    #[inline]
    fn log_gamma(&mut self, a: f64) -> Result<f64> {
        log_gamma(self, a)
    }

    #[inline]
    fn log_beta(&mut self, a1: f64, a2: f64) -> Result<f64> {
        log_beta(self, a1, a2)
    }

    #[inline]
    fn dirichlet_log(&mut self, alphas: &[f64]) -> Result<Vec<f64>> {
        dirichlet_log(self, alphas)
    }
}
