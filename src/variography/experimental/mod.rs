use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::parameters::{self, ParameterError};
use crate::spatial_database::location::Location;
use crate::spatial_database::point_set::PointSet;

pub mod cpu_calculator;
pub mod lag_bins;
pub mod pairs;
pub mod scaling;

pub use cpu_calculator::CPUCalculator;
pub use lag_bins::{LagBounds, LagStatistics};
pub use scaling::{ScaledLag, Scaling};

/// Range covered by the lag bins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LagRange {
    /// Largest pairwise distance found in the data.
    #[default]
    Auto,
    /// Fixed maximum lag, pairs further apart are ignored.
    Cutoff(f64),
}

impl LagRange {
    pub fn cutoff(&self) -> Option<f64> {
        match self {
            LagRange::Auto => None,
            LagRange::Cutoff(c) => Some(*c),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariogramParams {
    pub n_lags: usize,
    pub lag_range: LagRange,
    pub scaling: Scaling,
}

impl Default for VariogramParams {
    fn default() -> Self {
        Self {
            n_lags: 10,
            lag_range: LagRange::Auto,
            scaling: Scaling::Envelope,
        }
    }
}

impl VariogramParams {
    pub fn new(n_lags: usize, lag_range: LagRange, scaling: Scaling) -> Self {
        Self {
            n_lags,
            lag_range,
            scaling,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        parameters::check_lag_count(self.n_lags)?;
        if let Some(cutoff) = self.lag_range.cutoff() {
            parameters::check_lag_cutoff(cutoff)?;
        }
        Ok(())
    }
}

pub trait ExperimentalVariogramCalculator {
    fn calculate(&self, params: &VariogramParams)
        -> Result<ExperimentalVariogram, ParameterError>;
}

/// Binned semivariance of a point set. Only bins holding pairs are kept,
/// ordered by lag.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ExperimentalVariogram {
    pub lags: Vec<LagStatistics>,
    pub max_distance: f64,
    pub pair_count: usize,
    pub coincident_pairs: usize,
    pub scaling: Scaling,
}

/// One plotted point, scaled when the variogram was scaled. Bounds are
/// absent when only the semivariance was scaled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VariogramPoint {
    pub lag: f64,
    pub semivariance: f64,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

impl ExperimentalVariogram {
    pub fn empty(max_distance: f64, coincident_pairs: usize, scaling: Scaling) -> Self {
        warn!(
            max_distance,
            coincident_pairs, "no pairs with distance > 0 to bin, variogram is empty"
        );
        Self {
            lags: Vec::new(),
            max_distance,
            pair_count: 0,
            coincident_pairs,
            scaling,
        }
    }

    /// Semivariogram of `data` with a fresh pairwise pass.
    pub fn compute<L: Location>(
        data: &PointSet<L>,
        params: &VariogramParams,
    ) -> Result<Self, ParameterError> {
        CPUCalculator::new(data).calculate(params)
    }

    pub fn is_empty(&self) -> bool {
        self.lags.is_empty()
    }

    /// Pairs that ended up in a bin.
    pub fn binned_pairs(&self) -> usize {
        self.lags.iter().map(|l| l.count).sum()
    }

    pub fn series(&self) -> Vec<VariogramPoint> {
        self.lags
            .iter()
            .map(|l| match l.scaled {
                Some(scaled) => VariogramPoint {
                    lag: l.lag,
                    semivariance: scaled.semivariance,
                    lower_bound: scaled.lower_bound,
                    upper_bound: scaled.upper_bound,
                },
                None => VariogramPoint {
                    lag: l.lag,
                    semivariance: l.semivariance,
                    lower_bound: Some(l.lower_bound),
                    upper_bound: Some(l.upper_bound),
                },
            })
            .collect()
    }
}
