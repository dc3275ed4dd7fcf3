use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use rayhit::{RenderSettings, Scene};

/// Log levels selectable on the command line.
#[derive(Debug, Clone, ValueEnum)]
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

#[derive(Parser, Debug)]
#[command(name = "rayhit")]
#[command(about = "Renders a built-in scene to a PPM image")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "cornell")]
    pub scene: Scene,

    /// Image width in pixels
    #[arg(long, default_value = "400")]
    pub width: usize,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "100")]
    pub samples: usize,

    /// Maximum number of bounces per path
    #[arg(long, default_value = "50")]
    pub max_depth: usize,

    /// Seed for scene layout and sampling
    #[arg(long, default_value = "0")]
    pub seed: u64,

    /// Output file; the image goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}

impl Args {
    pub fn render_settings(&self) -> RenderSettings {
        RenderSettings {
            image_width: self.width,
            samples_per_pixel: self.samples,
            max_depth: self.max_depth,
            seed: self.seed,
        }
    }
}
