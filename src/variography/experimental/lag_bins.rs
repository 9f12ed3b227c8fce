use serde::Serialize;
use tracing::debug;

use super::pairs::LagPair;
use super::scaling::ScaledLag;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LagBounds {
    pub lb: f64,
    pub ub: f64,
}

impl LagBounds {
    pub fn new(lb: f64, ub: f64) -> Self {
        Self { lb, ub }
    }

    pub fn mid_point(&self) -> f64 {
        (self.lb + self.ub) / 2f64
    }
}

/// Aggregated squared differences of one lag bin.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LagStatistics {
    pub index: usize,
    pub bounds: LagBounds,
    pub count: usize,
    //bin centre
    pub lag: f64,
    pub semivariance: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaled: Option<ScaledLag>,
}

impl LagStatistics {
    /// `None` for an empty bin.
    pub fn from_diffs(index: usize, bin_size: f64, diffs: &[f64]) -> Option<Self> {
        let count = diffs.len();
        if count == 0 {
            return None;
        }

        let mean = diffs.iter().sum::<f64>() / count as f64;
        let semivariance = 0.5 * mean;

        let (lower_bound, upper_bound) = if count > 1 {
            let variance = diffs.iter().map(|d| (d - mean) * (d - mean)).sum::<f64>()
                / (count - 1) as f64;
            let semivariance_std_dev = 0.5 * variance.sqrt();
            (
                (semivariance - semivariance_std_dev).max(0.0),
                semivariance + semivariance_std_dev,
            )
        } else {
            (semivariance, semivariance)
        };

        Some(Self {
            index,
            bounds: LagBounds::new(index as f64 * bin_size, (index + 1) as f64 * bin_size),
            count,
            lag: (index as f64 + 0.5) * bin_size,
            semivariance,
            lower_bound,
            upper_bound,
            scaled: None,
        })
    }
}

/// Fixed width bins over `[0, range]`.
#[derive(Clone, Debug)]
pub struct LagBins {
    bin_size: f64,
    diffs: Vec<Vec<f64>>,
}

impl LagBins {
    /// `None` when the range cannot be split into bins of positive width.
    pub fn new(range: f64, n_lags: usize) -> Option<Self> {
        if n_lags == 0 {
            return None;
        }
        let bin_size = range / n_lags as f64;
        if !(bin_size.is_finite() && bin_size > 0.0) {
            return None;
        }

        debug!(range, n_lags, bin_size, "lag bins");
        Some(Self {
            bin_size,
            diffs: vec![Vec::new(); n_lags],
        })
    }

    pub fn bin_size(&self) -> f64 {
        self.bin_size
    }

    pub fn n_lags(&self) -> usize {
        self.diffs.len()
    }

    /// Interior edges belong to the upper bin, the far edge to the last bin.
    #[inline(always)]
    pub fn index_of(&self, distance: f64) -> usize {
        // float to int casts saturate, negatives land in bin 0
        let index = (distance / self.bin_size).floor() as usize;
        index.min(self.n_lags() - 1)
    }

    pub fn insert(&mut self, pair: &LagPair) {
        let index = self.index_of(pair.distance);
        self.diffs[index].push(pair.diff_sq);
    }

    pub fn statistics(&self) -> Vec<LagStatistics> {
        self.diffs
            .iter()
            .enumerate()
            .filter_map(|(index, diffs)| LagStatistics::from_diffs(index, self.bin_size, diffs))
            .collect()
    }
}
