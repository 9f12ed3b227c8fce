use std::error::Error;
use std::fmt;
use std::fmt::Write as _;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::spatial_database::point_set::SampleRecord;
use crate::variography::experimental::{ExperimentalVariogram, VariogramPoint};

#[derive(Debug)]
pub enum ReportError {
    Io(io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Io(e) => write!(f, "Failed to write report: {}", e),
            ReportError::Csv(e) => write!(f, "Failed to write CSV: {}", e),
            ReportError::Json(e) => write!(f, "Failed to serialize JSON: {}", e),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Io(e) => Some(e),
            ReportError::Csv(e) => Some(e),
            ReportError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReportError {
    fn from(value: io::Error) -> Self {
        ReportError::Io(value)
    }
}

impl From<csv::Error> for ReportError {
    fn from(value: csv::Error) -> Self {
        ReportError::Csv(value)
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(value: serde_json::Error) -> Self {
        ReportError::Json(value)
    }
}

/// One line status message for a finished run.
pub fn summary(num_points: usize, variogram: &ExperimentalVariogram) -> String {
    if variogram.is_empty() {
        return format!(
            "Generated {} data points. No variogram data: no pairs with distance > 0 in range.",
            num_points
        );
    }
    format!(
        "Generated {} data points. Calculated {} variogram bins with data. \
         Max lag distance considered: {:.1}.",
        num_points,
        variogram.lags.len(),
        variogram.max_distance
    )
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.3}", v))
}

/// Fixed width table of the plotted series, raw statistics alongside.
pub fn text_table(variogram: &ExperimentalVariogram) -> String {
    let mut out = String::new();
    if variogram.is_empty() {
        out.push_str("no data\n");
        return out;
    }

    let _ = writeln!(
        out,
        "{:>5} {:>6} {:>9} {:>12} {:>9} {:>9} {:>10} {:>8} {:>8}",
        "bin", "pairs", "lag", "gamma", "lower", "upper", "plotted", "p_lower", "p_upper"
    );
    for (lag, point) in variogram.lags.iter().zip(variogram.series()) {
        let _ = writeln!(
            out,
            "{:>5} {:>6} {:>9.2} {:>12.3} {:>9.3} {:>9.3} {:>10.3} {:>8} {:>8}",
            lag.index,
            lag.count,
            lag.lag,
            lag.semivariance,
            lag.lower_bound,
            lag.upper_bound,
            point.semivariance,
            fmt_opt(point.lower_bound),
            fmt_opt(point.upper_bound),
        );
    }
    let _ = writeln!(
        out,
        "pairs: {} ({} binned, {} coincident)",
        variogram.pair_count,
        variogram.binned_pairs(),
        variogram.coincident_pairs
    );
    out
}

/// Everything a renderer needs: scatter samples and the variogram series.
#[derive(Serialize)]
pub struct VariogramReport<'a> {
    pub summary: String,
    pub points: Vec<SampleRecord>,
    pub value_range: Option<(f64, f64)>,
    pub series: Vec<VariogramPoint>,
    pub variogram: &'a ExperimentalVariogram,
}

impl<'a> VariogramReport<'a> {
    pub fn new(
        points: Vec<SampleRecord>,
        value_range: Option<(f64, f64)>,
        variogram: &'a ExperimentalVariogram,
    ) -> Self {
        Self {
            summary: summary(points.len(), variogram),
            series: variogram.series(),
            points,
            value_range,
            variogram,
        }
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

//csv needs every column present, `y` stays blank for sequences
#[derive(Serialize)]
struct PointRow {
    x: f64,
    y: Option<f64>,
    z: f64,
}

pub fn write_points_csv<W: io::Write>(
    writer: W,
    points: &[SampleRecord],
) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in points {
        wtr.serialize(PointRow {
            x: record.x,
            y: record.y,
            z: record.z,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct LagRow {
    index: usize,
    count: usize,
    lag: f64,
    semivariance: f64,
    lower_bound: f64,
    upper_bound: f64,
    scaled_semivariance: Option<f64>,
    scaled_lower_bound: Option<f64>,
    scaled_upper_bound: Option<f64>,
}

pub fn write_variogram_csv<W: io::Write>(
    writer: W,
    variogram: &ExperimentalVariogram,
) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for lag in variogram.lags.iter() {
        wtr.serialize(LagRow {
            index: lag.index,
            count: lag.count,
            lag: lag.lag,
            semivariance: lag.semivariance,
            lower_bound: lag.lower_bound,
            upper_bound: lag.upper_bound,
            scaled_semivariance: lag.scaled.map(|s| s.semivariance),
            scaled_lower_bound: lag.scaled.and_then(|s| s.lower_bound),
            scaled_upper_bound: lag.scaled.and_then(|s| s.upper_bound),
        })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `points.csv` and `variogram.csv` into `dir`, creating it if needed.
pub fn write_csv_dir(
    dir: &Path,
    points: &[SampleRecord],
    variogram: &ExperimentalVariogram,
) -> Result<(), ReportError> {
    std::fs::create_dir_all(dir)?;
    write_points_csv(File::create(dir.join("points.csv"))?, points)?;
    write_variogram_csv(File::create(dir.join("variogram.csv"))?, variogram)?;
    Ok(())
}
