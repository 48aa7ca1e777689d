use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use palgen::models::QuantConfig;
use palgen::services::QuantizePipeline;

#[derive(Parser)]
#[command(name = "palgen")]
#[command(about = "Frequency-weighted palette generation and PNG color quantization")]
#[command(version)]
struct Cli {
    /// Log every palette slot as it is chosen
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a palette from a PNG and write it as JASC-PAL
    Palette {
        /// Input PNG file
        input: PathBuf,

        /// Output JASC-PAL file
        output: PathBuf,

        #[command(flatten)]
        quant: QuantArgs,
    },
    /// Build a palette and remap the PNG onto it as an indexed PNG
    Quantize {
        /// Input PNG file
        input: PathBuf,

        /// Output indexed PNG file
        output: PathBuf,

        /// Re-compress the output with oxipng
        #[arg(long)]
        optimize: bool,

        #[command(flatten)]
        quant: QuantArgs,
    },
}

/// Quantization settings shared by both commands; each overrides --config.
#[derive(Args, Debug, Clone, Default)]
struct QuantArgs {
    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Working bits per channel [1-8]
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=8))]
    bit_depth: Option<u8>,

    /// Output bits per channel [1-8] (defaults to --bit-depth)
    #[arg(long, visible_alias = "db", value_parser = clap::value_parser!(u8).range(1..=8))]
    output_bit_depth: Option<u8>,

    /// Palette size including placeholders (0 = one entry per distinct color)
    #[arg(short = 'n', long)]
    max_colors: Option<usize>,

    /// Leading placeholder slots
    #[arg(short, long)]
    skip: Option<usize>,

    /// Most frequent colors taken before greedy selection
    #[arg(short, long)]
    preselect: Option<usize>,

    /// Worker threads (0 = all cores)
    #[arg(short = 'j', long)]
    workers: Option<usize>,
}

impl QuantArgs {
    fn overrides(&self) -> QuantConfig {
        QuantConfig {
            bit_depth: self.bit_depth,
            output_bit_depth: self.output_bit_depth,
            max_colors: self.max_colors,
            skip: self.skip,
            preselect: self.preselect,
            workers: self.workers,
        }
    }

    /// File settings (if any) with CLI flags on top.
    fn pipeline(&self) -> anyhow::Result<QuantizePipeline> {
        let file = match &self.config {
            Some(path) => QuantConfig::load(path)?,
            None => QuantConfig::default(),
        };
        let config = file.merged_with(self.overrides()).resolve()?;
        tracing::debug!(?config, "Resolved settings");
        Ok(QuantizePipeline::new(config))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Palette {
            input,
            output,
            quant,
        } => run_palette_command(&input, &output, &quant),
        Commands::Quantize {
            input,
            output,
            optimize,
            quant,
        } => run_quantize_command(&input, &output, optimize, &quant),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "palgen=debug,greedy_palette=debug"
    } else {
        "palgen=info,greedy_palette=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn run_palette_command(input: &Path, output: &Path, quant: &QuantArgs) -> anyhow::Result<()> {
    let pipeline = quant.pipeline()?;
    let result = pipeline.run_palette(input, output)?;
    tracing::info!(
        distinct_colors = result.distinct_colors(),
        palette = result.palette().len(),
        "Done"
    );
    Ok(())
}

fn run_quantize_command(
    input: &Path,
    output: &Path,
    optimize: bool,
    quant: &QuantArgs,
) -> anyhow::Result<()> {
    let pipeline = quant.pipeline()?;
    let image = pipeline.run_quantize(input, output, optimize)?;
    tracing::info!(
        width = image.width(),
        height = image.height(),
        palette = image.palette().len(),
        "Done"
    );
    Ok(())
}
