use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::RangeInclusive;

/// Pairwise enumeration is quadratic, keep it tractable.
pub const MAX_POINTS: usize = 500;
pub const MIN_POINTS: usize = 2;
pub const NUM_POINTS: RangeInclusive<usize> = MIN_POINTS..=MAX_POINTS;
pub const NOISE_LEVEL: RangeInclusive<f64> = 0.0..=1.0;
pub const LAG_COUNT: RangeInclusive<usize> = 3..=30;

#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    NumPoints(usize),
    NoiseLevel(f64),
    LagCount(usize),
    LagCutoff(f64),
    Extent(f64, f64),
}

impl Display for ParameterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NumPoints(n) => write!(
                f,
                "Invalid number of points: {} (expected {}-{})",
                n,
                NUM_POINTS.start(),
                NUM_POINTS.end()
            ),
            ParameterError::NoiseLevel(v) => write!(
                f,
                "Invalid noise level: {} (expected {}-{})",
                v,
                NOISE_LEVEL.start(),
                NOISE_LEVEL.end()
            ),
            ParameterError::LagCount(n) => write!(
                f,
                "Invalid number of lag bins: {} (expected {}-{})",
                n,
                LAG_COUNT.start(),
                LAG_COUNT.end()
            ),
            ParameterError::LagCutoff(d) => {
                write!(f, "Invalid max lag distance: {} (must be positive)", d)
            }
            ParameterError::Extent(x, y) => {
                write!(f, "Invalid spatial extent: {} x {} (must be positive)", x, y)
            }
        }
    }
}

impl Error for ParameterError {}

pub fn check_num_points(n: usize) -> Result<usize, ParameterError> {
    if NUM_POINTS.contains(&n) {
        Ok(n)
    } else {
        Err(ParameterError::NumPoints(n))
    }
}

/// NaN fails the range check as well.
pub fn check_noise_level(noise: f64) -> Result<f64, ParameterError> {
    if NOISE_LEVEL.contains(&noise) {
        Ok(noise)
    } else {
        Err(ParameterError::NoiseLevel(noise))
    }
}

pub fn check_lag_count(n: usize) -> Result<usize, ParameterError> {
    if LAG_COUNT.contains(&n) {
        Ok(n)
    } else {
        Err(ParameterError::LagCount(n))
    }
}

pub fn check_lag_cutoff(cutoff: f64) -> Result<f64, ParameterError> {
    if cutoff.is_finite() && cutoff > 0.0 {
        Ok(cutoff)
    } else {
        Err(ParameterError::LagCutoff(cutoff))
    }
}
