//! Error types for log-domain generators and table construction.

use thiserror::Error;

/// Errors raised by the log-domain layer.
///
/// All of them are fatal where they are raised; nothing in this crate
/// retries. Rejection-loop restarts inside the samplers are ordinary control
/// flow and never surface here.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LogDomainError {
    /// A shape parameter or configuration value outside its domain.
    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Name of the offending argument
        name: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Interpolation sites that cannot define a polynomial.
    #[error("degenerate interpolation input: {detail}")]
    DegenerateInput {
        /// What was wrong with the sites
        detail: String,
    },

    /// The coefficient table could not be allocated.
    #[error("allocation of {bytes} bytes failed")]
    AllocationFailure {
        /// Size of the failed request
        bytes: usize,
    },
}

pub type Result<T> = std::result::Result<T, LogDomainError>;
