use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use super::location::Location;

/// Sample locations and their measured values, stored side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSet<L> {
    pub points: Vec<L>,
    pub data: Vec<f64>,
}

/// Flat `{x, y?, z}` view of a sample, used by scatter displays and exports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SampleRecord {
    pub x: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    pub z: f64,
}

impl<L> PointSet<L> {
    pub fn new(points: Vec<L>, data: Vec<f64>) -> Self {
        debug_assert_eq!(points.len(), data.len());
        Self { points, data }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Smallest and largest value, `None` for an empty set.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        match self.data.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some((v, v)),
            MinMaxResult::MinMax(min, max) => Some((min, max)),
        }
    }

    /// Position of `value` within the value range, in `[0, 1]`.
    ///
    /// A flat data set maps everything to the middle of the ramp.
    pub fn normalized_value(&self, value: f64) -> f64 {
        match self.value_range() {
            Some((min, max)) if max > min => ((value - min) / (max - min)).clamp(0.0, 1.0),
            _ => 0.5,
        }
    }
}

impl<L: Location> PointSet<L> {
    pub fn records(&self) -> Vec<SampleRecord> {
        self.points
            .iter()
            .zip(self.data.iter())
            .map(|(point, &z)| {
                let (x, y) = point.xy();
                SampleRecord { x, y, z }
            })
            .collect()
    }
}
