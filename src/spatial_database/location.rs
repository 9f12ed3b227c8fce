use nalgebra::{Point1, Point2};

/// A sample location that knows the lag separating it from another location.
pub trait Location: Copy {
    fn lag_to(&self, other: &Self) -> f64;

    /// Coordinates as `(x, y)`, `y` is `None` for sequential data.
    fn xy(&self) -> (f64, Option<f64>);
}

impl Location for Point2<f64> {
    #[inline(always)]
    fn lag_to(&self, other: &Self) -> f64 {
        nalgebra::distance(self, other)
    }

    fn xy(&self) -> (f64, Option<f64>) {
        (self.x, Some(self.y))
    }
}

impl Location for Point1<f64> {
    #[inline(always)]
    fn lag_to(&self, other: &Self) -> f64 {
        (self.x - other.x).abs()
    }

    fn xy(&self) -> (f64, Option<f64>) {
        (self.x, None)
    }
}
