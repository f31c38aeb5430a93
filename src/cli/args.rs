//! CLI argument parsing with clap.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use halftone::color::Color;
use halftone::pattern::Pointer;

use super::enums::OutputFormat;
use super::parsers::{
    parse_brightness, parse_color, parse_non_negative, parse_pointer, parse_positive,
    parse_size, parse_tall_ratio,
};

/// Halftone image filter with PNG and SVG export
#[derive(Parser, Debug)]
#[command(name = "halftone")]
#[command(version, about = "Halftone image filter with PNG and SVG export", long_about = None)]
#[command(after_help = "EXAMPLES:
    # PNG and SVG with default settings
    halftone render photo.jpg

    # Bigger dots, blue on cream, SVG only
    halftone render photo.jpg --dot-size 8 --dot-spacing 3 --color '#1e3a8a' --background '#fdf6e3' -f svg

    # Ten frames of the pointer pattern, pointer sweeping left to right
    halftone pattern --pointer 0,300 --to 800,300 --frames 10

    # Write a commented config file with all defaults
    halftone config init")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert an image into a halftone PNG and/or SVG
    Render(RenderArgs),
    /// Write frames of the pointer-reactive rectangle pattern as SVG
    Pattern(PatternArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Input image (PNG, JPEG, GIF, WebP, ...)
    pub input: PathBuf,

    /// Directory for halftone-image.png / halftone-image.svg
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// Which files to write
    #[arg(long, short, default_value = "both")]
    pub format: OutputFormat,

    /// Contrast multiplier around mid-gray
    #[arg(long, value_parser = parse_positive)]
    pub contrast: Option<f64>,

    /// Brightness offset (-255 to 255)
    #[arg(long, allow_hyphen_values = true, value_parser = parse_brightness)]
    pub brightness: Option<i32>,

    /// Rectangle width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub dot_size: Option<u32>,

    /// Gap between cells in pixels
    #[arg(long)]
    pub dot_spacing: Option<u32>,

    /// Maximum rectangle height as a multiple of the cell size
    #[arg(long, value_parser = parse_positive)]
    pub dot_density: Option<f64>,

    /// Skip rectangles shorter than this many pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub min_height: Option<u32>,

    /// Height ratio of the two short columns out of three (>= 0.1)
    #[arg(long, value_parser = parse_tall_ratio)]
    pub tall_ratio: Option<f64>,

    /// Rectangle color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    pub color: Option<Color>,

    /// Background color (#rrggbb)
    #[arg(long, value_parser = parse_color)]
    pub background: Option<Color>,

    /// Fit the image inside this canvas (WIDTHxHEIGHT)
    #[arg(long, value_parser = parse_size)]
    pub max_size: Option<(u32, u32)>,
}

#[derive(clap::Args, Debug)]
pub struct PatternArgs {
    /// Viewport size (WIDTHxHEIGHT)
    #[arg(long, default_value = "800x600", value_parser = parse_size)]
    pub viewport: (u32, u32),

    /// Pointer position on the first frame (X,Y); defaults to the viewport center
    #[arg(long, allow_hyphen_values = true, value_parser = parse_pointer)]
    pub pointer: Option<Pointer>,

    /// Pointer position on the last frame (X,Y); moves linearly from --pointer
    #[arg(long, allow_hyphen_values = true, value_parser = parse_pointer)]
    pub to: Option<Pointer>,

    /// Number of frames to write
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..=10000))]
    pub frames: u32,

    /// Simulated frame rate
    #[arg(long, default_value = "60", value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Directory for pattern-frame-NNN.svg
    #[arg(long, short)]
    pub out_dir: Option<PathBuf>,

    /// Peak growth factor under the pointer
    #[arg(long, value_parser = parse_non_negative)]
    pub sensitivity: Option<f64>,

    /// Influence radius as a fraction of the shorter viewport side
    #[arg(long, value_parser = parse_positive)]
    pub falloff: Option<f64>,

    /// Presentation transition duration in seconds
    #[arg(long, value_parser = parse_non_negative)]
    pub animation_speed: Option<f64>,

    /// Rectangle width in pixels
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub rect_width: Option<u32>,

    /// Height of every third (tall) rectangle
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub tall_height: Option<u32>,

    /// Height of the other rectangles
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub short_height: Option<u32>,

    /// Horizontal gap between rectangles
    #[arg(long)]
    pub horizontal_gap: Option<u32>,

    /// Vertical gap between rows
    #[arg(long)]
    pub vertical_gap: Option<u32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show effective configuration
    Show,
    /// Create default config file
    Init,
}
