use crate::error::{LogDomainError, Result};

/// Number of panels in the default log-sum table
pub const NUMPANELS: usize = 1_000_000;
/// Degree of the per-panel polynomial
pub const DEG: usize = 2;
/// Coefficients stored per panel
pub const NCOEFFS: usize = DEG + 1;

/// Build parameters for [`LogSumTable`](crate::LogSumTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogSumConfig {
    /// Number of equal sub-ranges of y = 1/(1+z) on (0, 1]
    pub panels: usize,
}

impl Default for LogSumConfig {
    fn default() -> Self {
        Self { panels: NUMPANELS }
    }
}

impl LogSumConfig {
    pub fn with_panels(mut self, panels: usize) -> Self {
        self.panels = panels;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.panels == 0 {
            return Err(LogDomainError::InvalidParameter {
                name: "panels",
                value: self.panels as f64,
            });
        }
        Ok(())
    }

    /// Bytes occupied by the coefficient buffer, final panel included
    pub fn table_bytes(&self) -> usize {
        self.panels
            .saturating_add(1)
            .saturating_mul(NCOEFFS * std::mem::size_of::<f64>())
    }
}
