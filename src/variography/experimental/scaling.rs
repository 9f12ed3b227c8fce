use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::lag_bins::LagStatistics;

/// How bin values are normalised for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    /// Raw values only.
    None,
    /// Semivariance and both bounds divided by the largest upper bound.
    #[default]
    Envelope,
    /// Semivariance divided by the largest semivariance, bounds left raw.
    Semivariance,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaledLag {
    pub semivariance: f64,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

#[inline(always)]
fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 {
        value / max
    } else {
        0.0
    }
}

fn max_of(lags: &[LagStatistics], field: impl Fn(&LagStatistics) -> f64) -> f64 {
    lags.iter()
        .map(|l| OrderedFloat(field(l)))
        .max()
        .map_or(0.0, |m| m.0)
}

/// Scaled values per bin, `None` when scaling is off.
pub fn scale(lags: &[LagStatistics], scaling: Scaling) -> Vec<Option<ScaledLag>> {
    match scaling {
        Scaling::None => vec![None; lags.len()],
        Scaling::Envelope => {
            let max_upper = max_of(lags, |l| l.upper_bound);
            lags.iter()
                .map(|l| {
                    Some(ScaledLag {
                        semivariance: ratio(l.semivariance, max_upper),
                        lower_bound: Some(ratio(l.lower_bound, max_upper)),
                        upper_bound: Some(ratio(l.upper_bound, max_upper)),
                    })
                })
                .collect()
        }
        Scaling::Semivariance => {
            let max_semivariance = max_of(lags, |l| l.semivariance);
            lags.iter()
                .map(|l| {
                    Some(ScaledLag {
                        semivariance: ratio(l.semivariance, max_semivariance),
                        lower_bound: None,
                        upper_bound: None,
                    })
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;

    use super::*;

    fn stats(diffs: &[&[f64]]) -> Vec<LagStatistics> {
        diffs
            .iter()
            .enumerate()
            .filter_map(|(i, d)| LagStatistics::from_diffs(i, 1.0, d))
            .collect()
    }

    #[test]
    fn envelope_scaling_tops_out_at_one() {
        let lags = stats(&[&[1.0, 3.0], &[4.0, 10.0], &[2.0]]);
        let scaled = scale(&lags, Scaling::Envelope);

        let max = scaled
            .iter()
            .map(|s| s.unwrap().upper_bound.unwrap())
            .fold(0f64, f64::max);
        assert_relative_eq!(max, 1.0);
        for s in scaled.iter().flatten() {
            assert!((0.0..=1.0).contains(&s.semivariance));
            assert!((0.0..=1.0).contains(&s.lower_bound.unwrap()));
        }
    }

    #[test]
    fn semivariance_scaling_leaves_bounds() {
        let lags = stats(&[&[2.0], &[8.0]]);
        let scaled = scale(&lags, Scaling::Semivariance);

        assert_relative_eq!(scaled[0].unwrap().semivariance, 0.25);
        assert_relative_eq!(scaled[1].unwrap().semivariance, 1.0);
        assert_eq!(scaled[1].unwrap().upper_bound, None);
    }

    #[test]
    fn zero_maximum_scales_to_zero() {
        let lags = stats(&[&[0.0, 0.0], &[0.0]]);

        for mode in [Scaling::Envelope, Scaling::Semivariance] {
            for s in scale(&lags, mode).iter().flatten() {
                assert_eq!(s.semivariance, 0.0);
                assert!(s.lower_bound.map_or(true, |v| v == 0.0));
                assert!(s.upper_bound.map_or(true, |v| v == 0.0));
            }
        }
    }

    #[test]
    fn no_scaling() {
        let lags = stats(&[&[2.0]]);
        assert_eq!(scale(&lags, Scaling::None), vec![None]);
    }
}
