use itertools::Itertools;

use crate::spatial_database::location::Location;
use crate::spatial_database::point_set::PointSet;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LagPair {
    pub distance: f64,
    pub diff_sq: f64,
}

/// Every retained pair of a point set plus what was seen while collecting them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PairSet {
    pub pairs: Vec<LagPair>,
    //largest retained distance
    pub max_distance: f64,
    //pairs sharing a location, never binned
    pub coincident: usize,
}

impl PairSet {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Collect all unordered pairs `(i, j)`, `i < j`.
///
/// Pairs at zero distance carry no spatial information and are only counted.
/// With a `cutoff`, pairs further apart than it are dropped.
pub fn enumerate_pairs<L: Location>(set: &PointSet<L>, cutoff: Option<f64>) -> PairSet {
    let n = set.len();
    let mut pair_set = PairSet {
        pairs: Vec::with_capacity(n * n.saturating_sub(1) / 2),
        ..Default::default()
    };

    for ((p_i, v_i), (p_j, v_j)) in set
        .points
        .iter()
        .zip(set.data.iter())
        .tuple_combinations()
    {
        let distance = p_i.lag_to(p_j);

        if distance == 0.0 {
            pair_set.coincident += 1;
            continue;
        }
        if !distance.is_finite() || cutoff.is_some_and(|c| distance > c) {
            continue;
        }

        let diff = v_i - v_j;
        pair_set.pairs.push(LagPair {
            distance,
            diff_sq: diff * diff,
        });

        if distance > pair_set.max_distance {
            pair_set.max_distance = distance;
        }
    }

    pair_set
}
