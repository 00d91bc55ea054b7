use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Cortex functional-connectivity graph generator.
#[derive(Parser)]
#[command(
    name = "cortex",
    version,
    about = "Time-varying connectivity graphs from resting-state network signals"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute graph frames for one subject and emit them as JSON.
    Graph(GraphArgs),
    /// List available subject files as JSON.
    List(ListArgs),
    /// Describe the available correlation methods and their parameters.
    Methods,
}

/// Correlation method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    /// Linear correlation coefficient.
    Pearson,
    /// Rank-based correlation.
    Spearman,
    /// Leadership ratio from precomputed wavelet phase data.
    Wavelet,
}

/// Smoothing kernel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SmoothingArg {
    MovingAverage,
    Exponential,
    Gaussian,
}

/// Interpolation kernel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum InterpolationArg {
    Linear,
    CubicSpline,
    BSpline,
    UnivariateSpline,
}

/// Arguments for the `graph` subcommand.
#[derive(clap::Args)]
pub struct GraphArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cortex.toml")]
    pub config: PathBuf,

    /// Subject file path, relative to the configured data directory.
    #[arg(short, long)]
    pub file: String,

    /// Correlation method.
    #[arg(short, long, value_enum, default_value = "pearson")]
    pub method: MethodArg,

    /// Override sliding window size from config.
    #[arg(short = 'w', long)]
    pub window_size: Option<usize>,

    /// Override step between windows from config.
    #[arg(short, long)]
    pub step: Option<usize>,

    /// Optional interpolation kernel applied before smoothing.
    #[arg(long, value_enum)]
    pub interpolation: Option<InterpolationArg>,

    /// Frame multiplication factor for interpolation.
    #[arg(long, default_value_t = 2)]
    pub factor: usize,

    /// Optional smoothing kernel applied after interpolation.
    #[arg(long, value_enum)]
    pub smoothing: Option<SmoothingArg>,

    /// Window for moving-average smoothing.
    #[arg(long, default_value_t = 3)]
    pub smoothing_window: usize,

    /// Alpha for exponential smoothing.
    #[arg(long, default_value_t = 0.5)]
    pub alpha: f64,

    /// Sigma for gaussian smoothing.
    #[arg(long, default_value_t = 1.0)]
    pub sigma: f64,

    /// Write JSON output here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "cortex.toml")]
    pub config: PathBuf,
}
