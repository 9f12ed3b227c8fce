use crate::parameters::{ParameterError, MAX_POINTS};
use crate::spatial_database::location::Location;
use crate::spatial_database::point_set::PointSet;

use super::lag_bins::LagBins;
use super::pairs::enumerate_pairs;
use super::scaling::scale;
use super::{ExperimentalVariogram, ExperimentalVariogramCalculator, VariogramParams};

/// Exhaustive pairwise calculator, every pair of samples is visited once.
#[derive(Clone, Copy)]
pub struct CPUCalculator<'a, L> {
    //data set
    data: &'a PointSet<L>,
}

impl<'a, L> CPUCalculator<'a, L> {
    pub fn new(data: &'a PointSet<L>) -> Self {
        Self { data }
    }
}

impl<'a, L: Location> ExperimentalVariogramCalculator for CPUCalculator<'a, L> {
    fn calculate(
        &self,
        params: &VariogramParams,
    ) -> Result<ExperimentalVariogram, ParameterError> {
        params.validate()?;
        if self.data.len() > MAX_POINTS {
            return Err(ParameterError::NumPoints(self.data.len()));
        }

        let cutoff = params.lag_range.cutoff();
        let pair_set = enumerate_pairs(self.data, cutoff);

        //binning range, either fixed or the furthest retained pair
        let range = cutoff.unwrap_or(pair_set.max_distance);

        if pair_set.is_empty() {
            return Ok(ExperimentalVariogram::empty(
                cutoff.unwrap_or(0.0),
                pair_set.coincident,
                params.scaling,
            ));
        }

        let Some(mut bins) = LagBins::new(range, params.n_lags) else {
            return Ok(ExperimentalVariogram::empty(
                range,
                pair_set.coincident,
                params.scaling,
            ));
        };

        for pair in pair_set.pairs.iter() {
            bins.insert(pair);
        }

        let mut lags = bins.statistics();
        let scaled_lags = scale(&lags, params.scaling);
        for (lag, scaled) in lags.iter_mut().zip(scaled_lags) {
            lag.scaled = scaled;
        }

        Ok(ExperimentalVariogram {
            lags,
            max_distance: range,
            pair_count: pair_set.len(),
            coincident_pairs: pair_set.coincident,
            scaling: params.scaling,
        })
    }
}

#[cfg(test)]
mod test {
    use approx::assert_relative_eq;
    use nalgebra::{Point1, Point2};

    use crate::variography::experimental::{LagRange, Scaling};

    use super::*;

    fn on_x_axis(values: &[f64]) -> PointSet<Point2<f64>> {
        PointSet::new(
            (0..values.len()).map(|i| Point2::new(i as f64, 0.0)).collect(),
            values.to_vec(),
        )
    }

    fn raw(n_lags: usize) -> VariogramParams {
        VariogramParams::new(n_lags, LagRange::Auto, Scaling::None)
    }

    #[test]
    fn unit_lag_bin_of_parabola() {
        // z = x^2, unit lags pair up (0,1), (1,4), (4,9)
        let data = on_x_axis(&[0.0, 1.0, 4.0, 9.0]);
        let vgram = CPUCalculator::new(&data).calculate(&raw(3)).unwrap();

        assert_relative_eq!(vgram.max_distance, 3.0);
        assert_eq!(vgram.pair_count, 6);

        let first = &vgram.lags[0];
        assert_eq!(first.index, 1);
        assert_eq!(first.count, 3);
        assert_relative_eq!(first.lag, 1.5);
        assert_relative_eq!(first.semivariance, 0.5 * (1.0 + 9.0 + 25.0) / 3.0);

        // distance 2 and the far edge at 3 share the last bin
        let last = &vgram.lags[1];
        assert_eq!(last.index, 2);
        assert_eq!(last.count, 3);
        assert_relative_eq!(last.semivariance, 0.5 * (16.0 + 64.0 + 81.0) / 3.0);
    }

    #[test]
    fn unit_lag_semivariance_value() {
        let data = on_x_axis(&[0.0, 1.0, 4.0, 11.0]);
        let vgram = CPUCalculator::new(&data).calculate(&raw(3)).unwrap();

        assert_relative_eq!(vgram.lags[0].semivariance, 59.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(vgram.lags[0].semivariance, 9.833, epsilon = 1e-3);
    }

    #[test]
    fn cutoff_sets_the_range() {
        let data = on_x_axis(&[0.0, 1.0, 4.0, 9.0]);
        let params = VariogramParams::new(4, LagRange::Cutoff(2.0), Scaling::None);
        let vgram = CPUCalculator::new(&data).calculate(&params).unwrap();

        assert_relative_eq!(vgram.max_distance, 2.0);
        assert_eq!(vgram.pair_count, 5);
        assert_eq!(vgram.lags.len(), 2);
        assert_eq!(vgram.lags[0].index, 2);
        assert_eq!(vgram.lags[1].index, 3);
    }

    #[test]
    fn cutoff_below_min_distance_is_empty() {
        let data = on_x_axis(&[0.0, 1.0, 4.0, 9.0]);
        let params = VariogramParams::new(3, LagRange::Cutoff(0.5), Scaling::Envelope);
        let vgram = CPUCalculator::new(&data).calculate(&params).unwrap();

        assert!(vgram.is_empty());
        assert_eq!(vgram.pair_count, 0);
    }

    #[test]
    fn coincident_points_are_empty() {
        let data = PointSet::new(vec![Point1::new(2.0); 5], vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let vgram = CPUCalculator::new(&data).calculate(&raw(5)).unwrap();

        assert!(vgram.is_empty());
        assert_eq!(vgram.pair_count, 0);
        assert_eq!(vgram.coincident_pairs, 10);
        assert_eq!(vgram.max_distance, 0.0);
    }

    #[test]
    fn constant_values_scale_to_zero() {
        let data = on_x_axis(&[7.0; 12]);
        let params = VariogramParams::new(5, LagRange::Auto, Scaling::Envelope);
        let vgram = CPUCalculator::new(&data).calculate(&params).unwrap();

        assert!(!vgram.is_empty());
        for lag in vgram.lags.iter() {
            assert_eq!(lag.semivariance, 0.0);
            let scaled = lag.scaled.unwrap();
            assert_eq!(scaled.semivariance, 0.0);
            assert_eq!(scaled.lower_bound, Some(0.0));
            assert_eq!(scaled.upper_bound, Some(0.0));
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let data = on_x_axis(&[0.0, 1.0]);

        assert_eq!(
            CPUCalculator::new(&data).calculate(&raw(2)),
            Err(ParameterError::LagCount(2))
        );
        let params = VariogramParams::new(3, LagRange::Cutoff(-1.0), Scaling::None);
        assert_eq!(
            CPUCalculator::new(&data).calculate(&params),
            Err(ParameterError::LagCutoff(-1.0))
        );

        let too_many = on_x_axis(&vec![0.0; MAX_POINTS + 1]);
        assert_eq!(
            CPUCalculator::new(&too_many).calculate(&raw(3)),
            Err(ParameterError::NumPoints(MAX_POINTS + 1))
        );
    }
}
