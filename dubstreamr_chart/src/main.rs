// Dubstreamr step chart generator, CLI entry point.
//
// Generates a random doubles chart with `dubstreamr_steps` and writes it as a
// diagram, chart-file note rows, or JSON.
// The pipeline: config loading → opening stance → random walk → rendering.
//
// Usage:
//   cargo run -p dubstreamr_chart --bin generate -- [--measures N] [--note N]
//     [--offset N] [--seed N] [--format diagram|sm|json] [--output PATH]
//     [--config PATH] [--max-move F] [--max-stretch F] [--max-cross F]
//     [--advanced] [--max-stand N]
//
// Logs go to stderr (RUST_LOG overrides the default filter) so the chart on
// stdout can be piped.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dubstreamr_chart::{ChartFormat, write_chart};
use dubstreamr_steps::{StepConfig, run};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Diagram,
    Sm,
    Json,
}

impl From<Format> for ChartFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Diagram => ChartFormat::Diagram,
            Format::Sm => ChartFormat::Sm,
            Format::Json => ChartFormat::Json,
        }
    }
}

/// Generate a random doubles step chart.
#[derive(Debug, Parser)]
#[command(name = "generate", version)]
struct Cli {
    /// Number of measures to generate.
    #[arg(long, default_value_t = 4)]
    measures: usize,

    /// Rows (steps) per measure.
    #[arg(long, default_value_t = 8)]
    note: usize,

    /// Blank rows before the first step.
    #[arg(long, default_value_t = 0)]
    offset: usize,

    /// RNG seed; omit for a random chart.
    #[arg(long)]
    seed: Option<u64>,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = Format::Diagram)]
    format: Format,

    /// Write the chart here instead of stdout.
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file with step thresholds; missing fields take defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override max_move_distance.
    #[arg(long)]
    max_move: Option<f64>,

    /// Override max_stretch_distance.
    #[arg(long)]
    max_stretch: Option<f64>,

    /// Override max_cross_distance.
    #[arg(long)]
    max_cross: Option<f64>,

    /// Allow holding and deepening crossovers.
    #[arg(long)]
    advanced: bool,

    /// Override max_stand_count.
    #[arg(long)]
    max_stand: Option<u32>,
}

impl Cli {
    /// Built-in defaults, then the config file, then flag overrides.
    fn step_config(&self) -> anyhow::Result<StepConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                StepConfig::from_json(&json)
                    .with_context(|| format!("loading config {}", path.display()))?
            }
            None => StepConfig::default(),
        };

        if let Some(value) = self.max_move {
            config.max_move_distance = value;
        }
        if let Some(value) = self.max_stretch {
            config.max_stretch_distance = value;
        }
        if let Some(value) = self.max_cross {
            config.max_cross_distance = value;
        }
        if self.advanced {
            config.allow_advanced_crossovers = true;
        }
        if let Some(value) = self.max_stand {
            config.max_stand_count = value;
        }

        config.validate().context("invalid step thresholds")?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dubstreamr=info,generate=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.step_config()?;
    let format = ChartFormat::from(cli.format);

    let mut rng = match cli.seed {
        Some(seed) => {
            info!(seed, "seeded run");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    info!(
        "Generating {} measures of {} steps ({:?})...",
        cli.measures, cli.note, config
    );
    let history = run(cli.measures, cli.note, config, &mut rng)
        .context("generating chart")?;
    info!(steps = history.len(), "walk complete");

    match &cli.output {
        Some(path) => {
            write_chart(format, &history, cli.offset, cli.note, path)
                .with_context(|| format!("writing chart to {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let text = format
                .render(&history, cli.offset, cli.note)
                .context("rendering chart")?;
            print!("{text}");
        }
    }
    Ok(())
}
