//! Calibration tables for the transformed density rejection samplers

pub mod exponential;
pub mod normal;

use exponential::{EXPONENTIAL_GUIDE, EXPONENTIAL_INTERVALS, EXPONENTIAL_TOTAL_AREA};
use normal::{NORMAL_GUIDE, NORMAL_INTERVALS, NORMAL_TOTAL_AREA};

/// One interval of a piecewise hat function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdrInterval {
    /// Left construction point
    pub x: f64,
    /// Transformed density at `x`
    pub tfx: f64,
    /// Derivative of the transformed density at `x`
    pub dtfx: f64,
    /// Squeeze / hat ratio
    pub sq: f64,
    /// Cumulative hat area up to and including this interval
    pub acum: f64,
    /// Hat area of this interval
    pub ahatr: f64,
}

impl TdrInterval {
    pub const fn new(x: f64, tfx: f64, dtfx: f64, sq: f64, acum: f64, ahatr: f64) -> Self {
        Self {
            x,
            tfx,
            dtfx,
            sq,
            acum,
            ahatr,
        }
    }
}

/// A complete TDR-PS table: intervals, guide table and the target density.
#[derive(Debug, Clone, Copy)]
pub struct TdrTable {
    pub guide: &'static [usize],
    pub intervals: &'static [TdrInterval],
    pub total_area: f64,
    pub pdf: fn(f64) -> f64,
}

const LOG_NORMAL_CONSTANT: f64 = 9.18938533204672780563e-01;

fn pdf_normal(x: f64) -> f64 {
    (-x * x / 2.0 - LOG_NORMAL_CONSTANT).exp()
}

fn pdf_exponential(x: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    (-x).exp()
}

pub static NORMAL: TdrTable = TdrTable {
    guide: &NORMAL_GUIDE,
    intervals: &NORMAL_INTERVALS,
    total_area: NORMAL_TOTAL_AREA,
    pdf: pdf_normal,
};

pub static EXPONENTIAL: TdrTable = TdrTable {
    guide: &EXPONENTIAL_GUIDE,
    intervals: &EXPONENTIAL_INTERVALS,
    total_area: EXPONENTIAL_TOTAL_AREA,
    pdf: pdf_exponential,
};
