use std::error::Error;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data_generation::{DataGenerator, GeneratorMode, DEFAULT_EXTENT};
use crate::parameters::{self, ParameterError};
use crate::variography::experimental::{LagRange, Scaling, VariogramParams};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub mode: GeneratorMode,
    pub num_points: usize,
    pub noise_level: f64,
    pub extent: [f64; 2],
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: GeneratorMode::TrendNoise,
            num_points: 50,
            noise_level: 0.3,
            extent: DEFAULT_EXTENT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn build(&self) -> Result<DataGenerator, ParameterError> {
        let generator = match self.seed {
            Some(seed) => DataGenerator::with_seed(self.mode, seed),
            None => DataGenerator::new(self.mode),
        };
        generator.with_extent(self.extent)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariogramConfig {
    pub n_lags: usize,
    pub lag_range: LagRange,
    //falls back to the generator mode's scaling
    pub scaling: Option<Scaling>,
}

impl Default for VariogramConfig {
    fn default() -> Self {
        Self {
            n_lags: 10,
            lag_range: LagRange::Auto,
            scaling: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub generator: GeneratorConfig,
    pub variogram: VariogramConfig,
}

impl RunConfig {
    pub fn variogram_params(&self) -> VariogramParams {
        VariogramParams::new(
            self.variogram.n_lags,
            self.variogram.lag_range,
            self.variogram
                .scaling
                .unwrap_or_else(|| self.generator.mode.default_scaling()),
        )
    }

    /// Check every input before anything is generated.
    pub fn validate(&self) -> Result<(), ParameterError> {
        parameters::check_num_points(self.generator.num_points)?;
        parameters::check_noise_level(self.generator.noise_level)?;
        self.variogram_params().validate()?;
        self.generator.build().map(|_| ())
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, std::io::Error),
    Parse(PathBuf, serde_json::Error),
    Invalid(ParameterError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(path, e) => {
                write!(f, "Failed to read config {}: {}", path.display(), e)
            }
            ConfigError::Parse(path, e) => {
                write!(f, "Failed to parse config {}: {}", path.display(), e)
            }
            ConfigError::Invalid(e) => write!(f, "Invalid config: {}", e),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Read(_, e) => Some(e),
            ConfigError::Parse(_, e) => Some(e),
            ConfigError::Invalid(e) => Some(e),
        }
    }
}

impl From<ParameterError> for ConfigError {
    fn from(value: ParameterError) -> Self {
        ConfigError::Invalid(value)
    }
}

pub fn parse_config(contents: &str, path: &Path) -> Result<RunConfig, ConfigError> {
    let config: RunConfig = serde_json::from_str(contents)
        .map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<RunConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    parse_config(&contents, path)
}

#[cfg(test)]
mod test {
    use super::*;

    fn parse(json: &str) -> Result<RunConfig, ConfigError> {
        parse_config(json, Path::new("test.json"))
    }

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse("{}").unwrap();

        assert_eq!(config, RunConfig::default());
        assert_eq!(config.variogram_params().scaling, Scaling::Envelope);
    }

    #[test]
    fn scaling_follows_mode_unless_set() {
        let config = parse(r#"{"generator": {"mode": "random_walk", "seed": 7}}"#).unwrap();
        assert_eq!(config.variogram_params().scaling, Scaling::Semivariance);
        assert_eq!(config.generator.seed, Some(7));

        let config = parse(
            r#"{"generator": {"mode": "random_walk"}, "variogram": {"scaling": "none"}}"#,
        )
        .unwrap();
        assert_eq!(config.variogram_params().scaling, Scaling::None);
    }

    #[test]
    fn cutoff_is_read() {
        let config = parse(r#"{"variogram": {"n_lags": 12, "lag_range": {"cutoff": 40.0}}}"#)
            .unwrap();

        assert_eq!(config.variogram_params().n_lags, 12);
        assert_eq!(config.variogram.lag_range, LagRange::Cutoff(40.0));
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = parse(r#"{"generator": {"num_points": 1000}}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid(ParameterError::NumPoints(1000))
        ));

        let err = parse(r#"{"variogram": {"n_lags": 50}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ParameterError::LagCount(50))));

        let err = parse(r#"{"generator": {"extent": [0.0, 5.0]}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ParameterError::Extent(..))));
    }

    #[test]
    fn malformed_json_names_the_file() {
        let err = parse("{ not json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config test.json"));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load_config(Path::new("/nonexistent/semivario.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read(..)));
    }
}
