use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ember_renderer::{RenderConfig, DEFAULT_MAX_DEPTH};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Image formats written after rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Ppm,
    Png,
    Both,
}

/// A single file to write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFile {
    Ppm(PathBuf),
    Png(PathBuf),
}

#[derive(Debug, Parser)]
#[command(name = "ember")]
#[command(about = "Render a sphere scene with a Monte Carlo path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 900, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: u32,

    /// Maximum path segments per sample, camera ray included
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Base seed for the per-pixel random generators
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// JSON scene description (built-in demo scene when omitted)
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output path without extension
    #[arg(short, long, default_value = "render")]
    pub output: PathBuf,

    /// Which image files to write
    #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
    pub format: OutputFormat,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            width: self.width,
            height: self.height,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            seed: self.seed,
        }
    }

    /// Files to write, in order.
    pub fn output_files(&self) -> Vec<ImageFile> {
        let ppm = ImageFile::Ppm(self.output.with_extension("ppm"));
        let png = ImageFile::Png(self.output.with_extension("png"));
        match self.format {
            OutputFormat::Ppm => vec![ppm],
            OutputFormat::Png => vec![png],
            OutputFormat::Both => vec![ppm, png],
        }
    }
}
