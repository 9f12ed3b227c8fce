pub mod config;
pub mod data_generation;
pub mod parameters;
pub mod report;
pub mod spatial_database;
pub mod variography;

pub mod prelude {

    pub mod re_exports {
        pub use nalgebra;
    }

    pub use crate::data_generation::{DataGenerator, GeneratedData, GeneratorMode};
    pub use crate::parameters::ParameterError;
    pub use crate::spatial_database::{Location, PointSet, SampleRecord};
    pub use crate::variography::experimental::{
        CPUCalculator, ExperimentalVariogram, ExperimentalVariogramCalculator, LagRange,
        LagStatistics, Scaling, VariogramParams, VariogramPoint,
    };
}
