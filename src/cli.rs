//! CLI argument parsing

use std::path::PathBuf;

use clap::Parser;
use rasterpack::config::{ColorMode, Overrides};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

impl From<ColorWhen> for ColorMode {
    fn from(value: ColorWhen) -> Self {
        match value {
            ColorWhen::Auto => ColorMode::Auto,
            ColorWhen::Always => ColorMode::Always,
            ColorWhen::Never => ColorMode::Never,
        }
    }
}

/// rasterpack - convert SVG icon trees into 1x/2x/3x PNGs
#[derive(Parser, Debug)]
#[command(name = "rasterpack")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "PNGs are written to <OUTPUT>/1x, <OUTPUT>/2x and <OUTPUT>/3x, \
mirroring the input tree. Batch mode empties <OUTPUT> first.")]
pub struct Cli {
    /// Directory containing the .svg sources
    #[arg(short, long, value_name = "DIR")]
    pub input: Option<PathBuf>,

    /// Directory receiving the density folders
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Keep running and convert changes as they happen
    #[arg(short, long)]
    pub watch: bool,

    /// Config file (defaults to ./rasterpack.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Coalesce watch changes that arrive within this many milliseconds (0 = off)
    #[arg(long, value_name = "MS")]
    pub debounce_ms: Option<u64>,

    /// Exit with status 1 when any render failed
    #[arg(long, conflicts_with = "watch")]
    pub fail_on_error: bool,

    /// Show what would be generated without touching the output directory
    #[arg(long, conflicts_with = "watch")]
    pub dry_run: bool,

    /// Print events as NDJSON
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows every generated file)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Command-line layer of the configuration
    pub fn overrides(&self) -> Overrides {
        Overrides {
            input: self.input.clone(),
            output: self.output.clone(),
            debounce_ms: self.debounce_ms,
            fail_on_error: self.fail_on_error,
            color: self.color.map(ColorMode::from),
        }
    }
}
