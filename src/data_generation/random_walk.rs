use nalgebra::Point1;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::spatial_database::point_set::PointSet;

/// Step size of the structured component when noise is 0.
pub const STRUCTURED_SCALE: f64 = 10.0;
/// Step size of the random component when noise is 1.
pub const NOISE_SCALE: f64 = 20.0;

/// Sequential samples at `x = 0, 1, ..` whose values accumulate a smooth
/// step and a noisy step. The walk starts from zero and the first sample
/// already carries one step.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    num_points: usize,
    noise_level: f64,
) -> PointSet<Point1<f64>> {
    let step_dist = Uniform::new(-0.5, 0.5);

    let mut points = Vec::with_capacity(num_points);
    let mut values = Vec::with_capacity(num_points);
    let mut current = 0f64;

    for i in 0..num_points {
        let structured = step_dist.sample(rng) * (1.0 - noise_level) * STRUCTURED_SCALE;
        let noise = step_dist.sample(rng) * noise_level * NOISE_SCALE;
        current += structured + noise;

        points.push(Point1::new(i as f64));
        values.push(current);
    }

    PointSet::new(points, values)
}

#[cfg(test)]
mod test {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn indices_are_sequential() {
        let mut rng = StdRng::seed_from_u64(0);
        let set = generate(&mut rng, 20, 0.3);

        for (i, p) in set.points.iter().enumerate() {
            assert_eq!(p.x, i as f64);
        }
    }

    #[test]
    fn steps_are_bounded() {
        let mut rng = StdRng::seed_from_u64(3);
        let noise = 0.25;
        let set = generate(&mut rng, 100, noise);

        // |step| < 0.5 * (1 - noise) * 10 + 0.5 * noise * 20
        let max_step = 0.5 * (1.0 - noise) * STRUCTURED_SCALE + 0.5 * noise * NOISE_SCALE;
        assert!(set.data[0].abs() <= max_step);
        for (a, b) in set.data.iter().zip(set.data.iter().skip(1)) {
            assert!((b - a).abs() <= max_step);
        }
    }
}
