use nalgebra::Point2;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::spatial_database::point_set::PointSet;

/// Trend amplitude reached at the far corner of the extent when noise is 0.
pub const TREND_SCALE: f64 = 100.0;
/// Width of the noise band when noise is 1.
pub const NOISE_SCALE: f64 = 150.0;

/// Scatter points uniformly over the extent with a diagonal linear trend
/// blended with uniform noise.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    num_points: usize,
    noise_level: f64,
    extent: [f64; 2],
) -> PointSet<Point2<f64>> {
    let trend_strength = TREND_SCALE * (1.0 - noise_level);
    let noise_strength = NOISE_SCALE * noise_level;

    let x_dist = Uniform::new(0.0, extent[0]);
    let y_dist = Uniform::new(0.0, extent[1]);
    let noise_dist = Uniform::new(-0.5, 0.5);

    let mut points = Vec::with_capacity(num_points);
    let mut values = Vec::with_capacity(num_points);

    for _ in 0..num_points {
        let x = x_dist.sample(rng);
        let y = y_dist.sample(rng);
        let trend = (x / extent[0] + y / extent[1]) * trend_strength / 2.0;
        let noise = noise_dist.sample(rng) * noise_strength;

        points.push(Point2::new(x, y));
        values.push(trend + noise);
    }

    PointSet::new(points, values)
}
