//! Transformed density rejection with proportional squeeze (TDR-PS)
//!
//! Both samplers share this loop and differ only in their [`TdrTable`].
//! The expected number of iterations is about 1.009 for the normal table and
//! 1.010 for the exponential one.

use crate::MtRand;
use crate::tables::TdrTable;

impl TdrTable {
    /// Draw one variate from the table's target density.
    pub fn sample(&self, rng: &mut MtRand) -> f64 {
        let last = self.intervals.len() - 1;
        loop {
            let mut u = rng.uniform_closed();
            // u == 1.0 would index one past the guide table
            let slot = ((u * self.guide.len() as f64) as usize).min(self.guide.len() - 1);
            let mut i = self.guide[slot];

            u *= self.total_area;
            while i < last && self.intervals[i].acum < u {
                i += 1;
            }
            let iv = &self.intervals[i];

            u -= iv.acum - iv.ahatr;
            let x = iv.x + (u * iv.tfx * iv.tfx) / (1.0 - iv.tfx * iv.dtfx * u);

            let mut v = rng.uniform_closed();
            if v <= iv.sq {
                return x;
            }

            let thx = iv.tfx + iv.dtfx * (x - iv.x);
            v /= thx * thx;
            if v <= (self.pdf)(x) {
                return x;
            }
        }
    }

    /// Verify the structural invariants of the table.
    ///
    /// Returns a description of the first violation found.
    pub fn check(&self) -> Result<(), String> {
        if self.intervals.is_empty() || self.guide.is_empty() {
            return Err("empty table".to_string());
        }
        for (k, pair) in self.intervals.windows(2).enumerate() {
            if pair[1].acum < pair[0].acum {
                return Err(format!(
                    "cumulative area decreases at interval {}: {} < {}",
                    k + 1,
                    pair[1].acum,
                    pair[0].acum
                ));
            }
        }
        if let Some(&g) = self.guide.iter().find(|&&g| g >= self.intervals.len()) {
            return Err(format!("guide index {} out of range", g));
        }
        if self.guide.windows(2).any(|w| w[1] < w[0]) {
            return Err("guide table not monotone".to_string());
        }
        let total = self.intervals[self.intervals.len() - 1].acum;
        if total != self.total_area {
            return Err(format!(
                "last cumulative area {} differs from total {}",
                total, self.total_area
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{EXPONENTIAL, NORMAL};

    #[test]
    fn test_tables_consistent() {
        assert_eq!(NORMAL.intervals.len(), 39);
        assert_eq!(NORMAL.guide.len(), 78);
        assert_eq!(EXPONENTIAL.intervals.len(), 18);
        assert_eq!(EXPONENTIAL.guide.len(), 36);
        NORMAL.check().unwrap();
        EXPONENTIAL.check().unwrap();
    }

    #[test]
    fn test_guide_points_below_target() {
        // The guide entry for slot k never overshoots the interval holding
        // the scaled value k / len, so the forward scan is sufficient.
        for table in [&NORMAL, &EXPONENTIAL] {
            let n = table.guide.len();
            for (k, &g) in table.guide.iter().enumerate() {
                let u = k as f64 / n as f64 * table.total_area;
                if g > 0 {
                    assert!(
                        table.intervals[g - 1].acum < u,
                        "guide slot {} starts too far at {}",
                        k,
                        g
                    );
                }
            }
        }
    }

    #[test]
    fn test_squeeze_ratios_in_unit_interval() {
        for table in [&NORMAL, &EXPONENTIAL] {
            for iv in table.intervals {
                assert!((0.0..=1.0).contains(&iv.sq));
                assert!(iv.ahatr >= 0.0);
            }
        }
    }

    #[test]
    fn test_exponential_nonnegative() {
        let mut rng = MtRand::new(3);
        for _ in 0..20_000 {
            assert!(EXPONENTIAL.sample(&mut rng) >= 0.0);
        }
    }
}
