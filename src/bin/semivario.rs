use std::env;
use std::path::{Path, PathBuf};

use semivario::config::{self, RunConfig};
use semivario::report::{self, VariogramReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
    Both,
}

impl OutputFormat {
    fn includes_text(self) -> bool {
        matches!(self, OutputFormat::Text | OutputFormat::Both)
    }

    fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

struct CliArgs {
    config_path: Option<PathBuf>,
    format: OutputFormat,
    csv_dir: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!("Usage: {program} [config.json] [--format text|json|both] [--csv-dir DIR]")
}

fn parse_args(program: &str, mut args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut cli = CliArgs {
        config_path: None,
        format: OutputFormat::Text,
        csv_dir: None,
    };
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format" => {
                let value = args.next().ok_or_else(|| usage(program))?;
                cli.format = match value.as_str() {
                    "text" => OutputFormat::Text,
                    "json" => OutputFormat::Json,
                    "both" => OutputFormat::Both,
                    other => return Err(format!("Unknown format '{other}'\n{}", usage(program))),
                };
            }
            "--csv-dir" => {
                let value = args.next().ok_or_else(|| usage(program))?;
                cli.csv_dir = Some(PathBuf::from(value));
            }
            "-h" | "--help" => return Err(usage(program)),
            path if cli.config_path.is_none() && !path.starts_with("--") => {
                cli.config_path = Some(PathBuf::from(path));
            }
            other => return Err(format!("Unexpected argument '{other}'\n{}", usage(program))),
        }
    }
    Ok(cli)
}

fn load(path: Option<&Path>) -> Result<RunConfig, String> {
    match path {
        Some(path) => config::load_config(path).map_err(|e| e.to_string()),
        None => Ok(RunConfig::default()),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "semivario".to_string());
    let cli = parse_args(&program, args)?;
    let config = load(cli.config_path.as_deref())?;

    let mut generator = config.generator.build().map_err(|e| e.to_string())?;
    let data = generator
        .generate(config.generator.num_points, config.generator.noise_level)
        .map_err(|e| e.to_string())?;
    let variogram = data
        .variogram(&config.variogram_params())
        .map_err(|e| e.to_string())?;
    info!(
        pairs = variogram.pair_count,
        bins = variogram.lags.len(),
        "variogram computed"
    );

    let report = VariogramReport::new(data.records(), data.value_range(), &variogram);

    if cli.format.includes_text() {
        println!("{}", report.summary);
        print!("{}", report::text_table(&variogram));
    }
    if cli.format.includes_json() {
        let json = report.to_json().map_err(|e| e.to_string())?;
        println!("{json}");
    }
    if let Some(dir) = &cli.csv_dir {
        report::write_csv_dir(dir, &report.points, &variogram).map_err(|e| e.to_string())?;
        eprintln!("CSV files written to {}", dir.display());
    }

    Ok(())
}
