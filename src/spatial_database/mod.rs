pub mod location;
pub mod point_set;

pub use location::Location;
pub use point_set::{PointSet, SampleRecord};
