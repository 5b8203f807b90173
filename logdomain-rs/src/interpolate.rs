//! Polynomial interpolation through tabulated points.
//!
//! [`neville`] evaluates the interpolating polynomial at a single point and
//! reports the last tableau correction as an error estimate.
//! [`poly_coefficients`] recovers the power-basis coefficients of that
//! polynomial by repeated extrapolation to zero and deflation. Both are thin
//! wrappers around [`PolyFitter`], which keeps its scratch space between
//! calls so that fitting a million panels does not allocate per panel.

use crate::error::{LogDomainError, Result};

fn check_sites(xa: &[f64], ya: &[f64]) -> Result<()> {
    if xa.is_empty() || xa.len() != ya.len() {
        return Err(LogDomainError::DegenerateInput {
            detail: format!(
                "need matching non-empty sites, got {} x and {} y values",
                xa.len(),
                ya.len()
            ),
        });
    }
    Ok(())
}

/// Neville's tableau. `c` and `d` are scratch and are overwritten.
fn tableau(
    c: &mut Vec<f64>,
    d: &mut Vec<f64>,
    xa: &[f64],
    ya: &[f64],
    x: f64,
) -> Result<(f64, f64)> {
    check_sites(xa, ya)?;
    let n = xa.len();

    c.clear();
    c.extend_from_slice(ya);
    d.clear();
    d.extend_from_slice(ya);

    // Start from the closest site
    let mut ns = 0;
    let mut dif = (x - xa[0]).abs();
    for (i, &xi) in xa.iter().enumerate().skip(1) {
        let dift = (x - xi).abs();
        if dift < dif {
            ns = i;
            dif = dift;
        }
    }

    let mut y = ya[ns];
    let mut dy = 0.0;
    for m in 1..n {
        for i in 0..n - m {
            let ho = xa[i] - x;
            let hp = xa[i + m] - x;
            let w = c[i + 1] - d[i];
            let den = ho - hp;
            if den == 0.0 {
                return Err(LogDomainError::DegenerateInput {
                    detail: format!("sites {} and {} coincide at {}", i, i + m, xa[i]),
                });
            }
            let den = w / den;
            d[i] = hp * den;
            c[i] = ho * den;
        }
        // Take the c (up) or d (down) correction that keeps the path
        // centred on x
        dy = if 2 * ns < n - m {
            c[ns]
        } else {
            ns -= 1;
            d[ns]
        };
        y += dy;
    }
    Ok((y, dy))
}

/// Reusable workspace for [`neville`] and [`poly_coefficients`].
#[derive(Debug, Default, Clone)]
pub struct PolyFitter {
    c: Vec<f64>,
    d: Vec<f64>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl PolyFitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value at `x` of the polynomial through `(xa[i], ya[i])`, with an
    /// error estimate.
    pub fn neville(&mut self, xa: &[f64], ya: &[f64], x: f64) -> Result<(f64, f64)> {
        tableau(&mut self.c, &mut self.d, xa, ya, x)
    }

    /// Write the ascending-power coefficients of the polynomial through
    /// `(xa[i], ya[i])` into `cof`, which must have one slot per site.
    pub fn coefficients_into(&mut self, xa: &[f64], ya: &[f64], cof: &mut [f64]) -> Result<()> {
        check_sites(xa, ya)?;
        if cof.len() != xa.len() {
            return Err(LogDomainError::DegenerateInput {
                detail: format!(
                    "{} sites need {} coefficient slots, got {}",
                    xa.len(),
                    xa.len(),
                    cof.len()
                ),
            });
        }

        let Self { c, d, x, y } = self;
        x.clear();
        x.extend_from_slice(xa);
        y.clear();
        y.extend_from_slice(ya);

        for slot in cof.iter_mut() {
            let (value, _) = tableau(c, d, x, y, 0.0)?;
            *slot = value;

            // Reduce every term, then drop the remaining site of smallest
            // magnitude
            let mut xmin = f64::INFINITY;
            let mut k = 0;
            for i in 0..x.len() {
                if x[i].abs() < xmin {
                    xmin = x[i].abs();
                    k = i;
                }
                if x[i] != 0.0 {
                    y[i] = (y[i] - value) / x[i];
                }
            }
            x.remove(k);
            y.remove(k);
        }
        Ok(())
    }

    /// Ascending-power coefficients of the polynomial through the sites
    pub fn coefficients(&mut self, xa: &[f64], ya: &[f64]) -> Result<Vec<f64>> {
        let mut cof = vec![0.0; xa.len()];
        self.coefficients_into(xa, ya, &mut cof)?;
        Ok(cof)
    }
}

/// Evaluate at `x` the unique polynomial through `(xa[i], ya[i])`.
///
/// Returns `(value, error_estimate)`. Fails with
/// [`LogDomainError::DegenerateInput`] if two sites coincide.
pub fn neville(xa: &[f64], ya: &[f64], x: f64) -> Result<(f64, f64)> {
    PolyFitter::new().neville(xa, ya, x)
}

/// Coefficients, lowest power first, of the polynomial through the sites.
pub fn poly_coefficients(xa: &[f64], ya: &[f64]) -> Result<Vec<f64>> {
    PolyFitter::new().coefficients(xa, ya)
}
