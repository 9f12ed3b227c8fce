use nalgebra::{Point1, Point2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::parameters::{self, ParameterError};
use crate::spatial_database::point_set::{PointSet, SampleRecord};
use crate::variography::experimental::{ExperimentalVariogram, Scaling, VariogramParams};

pub mod random_walk;
pub mod trend_noise;

pub const DEFAULT_EXTENT: [f64; 2] = [100.0, 100.0];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorMode {
    /// Scattered 2D points, linear trend plus noise.
    #[default]
    TrendNoise,
    /// Sequential 1D random walk.
    RandomWalk,
}

impl GeneratorMode {
    /// Display scaling conventionally paired with the mode.
    pub fn default_scaling(&self) -> Scaling {
        match self {
            GeneratorMode::TrendNoise => Scaling::Envelope,
            GeneratorMode::RandomWalk => Scaling::Semivariance,
        }
    }
}

/// Output of a [`DataGenerator`], 2D or 1D depending on the mode.
#[derive(Clone, Debug, PartialEq)]
pub enum GeneratedData {
    Planar(PointSet<Point2<f64>>),
    Sequential(PointSet<Point1<f64>>),
}

impl GeneratedData {
    pub fn len(&self) -> usize {
        match self {
            GeneratedData::Planar(set) => set.len(),
            GeneratedData::Sequential(set) => set.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn records(&self) -> Vec<SampleRecord> {
        match self {
            GeneratedData::Planar(set) => set.records(),
            GeneratedData::Sequential(set) => set.records(),
        }
    }

    pub fn value_range(&self) -> Option<(f64, f64)> {
        match self {
            GeneratedData::Planar(set) => set.value_range(),
            GeneratedData::Sequential(set) => set.value_range(),
        }
    }

    pub fn variogram(
        &self,
        params: &VariogramParams,
    ) -> Result<ExperimentalVariogram, ParameterError> {
        match self {
            GeneratedData::Planar(set) => ExperimentalVariogram::compute(set, params),
            GeneratedData::Sequential(set) => ExperimentalVariogram::compute(set, params),
        }
    }
}

pub struct DataGenerator {
    mode: GeneratorMode,
    extent: [f64; 2],
    rng: StdRng,
}

impl DataGenerator {
    pub fn new(mode: GeneratorMode) -> Self {
        Self {
            mode,
            extent: DEFAULT_EXTENT,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible generator.
    pub fn with_seed(mode: GeneratorMode, seed: u64) -> Self {
        Self {
            mode,
            extent: DEFAULT_EXTENT,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Spatial extent of the 2D mode.
    pub fn with_extent(mut self, extent: [f64; 2]) -> Result<Self, ParameterError> {
        if !extent.iter().all(|e| e.is_finite() && *e > 0.0) {
            return Err(ParameterError::Extent(extent[0], extent[1]));
        }
        self.extent = extent;
        Ok(self)
    }

    pub fn mode(&self) -> GeneratorMode {
        self.mode
    }

    pub fn extent(&self) -> [f64; 2] {
        self.extent
    }

    pub fn generate(
        &mut self,
        num_points: usize,
        noise_level: f64,
    ) -> Result<GeneratedData, ParameterError> {
        let num_points = parameters::check_num_points(num_points)?;
        let noise_level = parameters::check_noise_level(noise_level)?;

        debug!(mode = ?self.mode, num_points, noise_level, "generating samples");
        let data = match self.mode {
            GeneratorMode::TrendNoise => GeneratedData::Planar(trend_noise::generate(
                &mut self.rng,
                num_points,
                noise_level,
                self.extent,
            )),
            GeneratorMode::RandomWalk => GeneratedData::Sequential(random_walk::generate(
                &mut self.rng,
                num_points,
                noise_level,
            )),
        };
        Ok(data)
    }
}
