//! Configuration file handling for halftone.
//!
//! Loads default parameters from `~/.config/halftone/config.toml` or a custom
//! path. Every field is optional; anything missing falls back to the
//! built-in defaults, and command-line flags override both.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::halftone::RenderParameters;
use crate::loader::CanvasBounds;
use crate::pattern::{AnimationParameters, PatternParameters, PatternStyle};

/// Configuration file structure for halftone.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub halftone: HalftoneConfig,
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub pattern: PatternConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub colors: ColorsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct HalftoneConfig {
    pub contrast: Option<f64>,
    pub brightness: Option<i32>,
    pub dot_size: Option<u32>,
    pub dot_spacing: Option<u32>,
    pub dot_density: Option<f64>,
    pub min_height: Option<u32>,
    pub tall_ratio: Option<f64>,
    pub color: Option<Color>,
    pub background: Option<Color>,
}

#[derive(Debug, Deserialize, Default)]
pub struct CanvasConfig {
    pub max_width: Option<u32>,
    pub max_height: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct PatternConfig {
    pub rectangle_width: Option<u32>,
    pub tall_height: Option<u32>,
    pub short_height: Option<u32>,
    pub horizontal_gap: Option<u32>,
    pub vertical_gap: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct AnimationConfig {
    pub sensitivity: Option<f64>,
    pub falloff_size: Option<f64>,
    pub animation_speed: Option<f64>,
}

/// Pattern colors.
#[derive(Debug, Deserialize, Default)]
pub struct ColorsConfig {
    pub primary: Option<Color>,
    pub secondary: Option<Color>,
    pub background: Option<Color>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = default_path();
        if path.exists() {
            Self::load_from_explicit(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path the user asked for explicitly.
    /// A missing file is an error here.
    pub fn load_from_explicit(path: PathBuf) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
            path: path.clone(),
            source: e,
        })?;
        Self::parse(&content, &path)
    }

    /// Parse TOML text; `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Halftone parameters: config values over built-in defaults.
    pub fn render_parameters(&self) -> RenderParameters {
        let d = RenderParameters::default();
        let c = &self.halftone;
        RenderParameters {
            contrast: c.contrast.unwrap_or(d.contrast),
            brightness: c.brightness.unwrap_or(d.brightness),
            dot_size: c.dot_size.unwrap_or(d.dot_size),
            dot_spacing: c.dot_spacing.unwrap_or(d.dot_spacing),
            dot_density: c.dot_density.unwrap_or(d.dot_density),
            min_height: c.min_height.unwrap_or(d.min_height),
            tall_ratio: c.tall_ratio.unwrap_or(d.tall_ratio),
            foreground: c.color.unwrap_or(d.foreground),
            background: c.background.unwrap_or(d.background),
        }
    }

    pub fn canvas_bounds(&self) -> CanvasBounds {
        CanvasBounds {
            max_width: self.canvas.max_width.unwrap_or(CanvasBounds::DEFAULT.max_width),
            max_height: self
                .canvas
                .max_height
                .unwrap_or(CanvasBounds::DEFAULT.max_height),
        }
    }

    pub fn pattern_parameters(&self) -> PatternParameters {
        let d = PatternParameters::default();
        let c = &self.pattern;
        PatternParameters {
            rectangle_width: c.rectangle_width.unwrap_or(d.rectangle_width),
            tall_height: c.tall_height.unwrap_or(d.tall_height),
            short_height: c.short_height.unwrap_or(d.short_height),
            horizontal_gap: c.horizontal_gap.unwrap_or(d.horizontal_gap),
            vertical_gap: c.vertical_gap.unwrap_or(d.vertical_gap),
        }
    }

    pub fn animation_parameters(&self) -> AnimationParameters {
        let d = AnimationParameters::default();
        let c = &self.animation;
        AnimationParameters {
            sensitivity: c.sensitivity.unwrap_or(d.sensitivity),
            falloff_size: c.falloff_size.unwrap_or(d.falloff_size),
            animation_speed: c.animation_speed.unwrap_or(d.animation_speed),
        }
    }

    pub fn pattern_style(&self) -> PatternStyle {
        let d = PatternStyle::default();
        PatternStyle {
            primary: self.colors.primary.unwrap_or(d.primary),
            secondary: self.colors.secondary.unwrap_or(d.secondary),
            background: self.colors.background.unwrap_or(d.background),
        }
    }

    /// Output directory: config value or the current directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("halftone").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/halftone/config.toml")
        })
}

/// Commented template written by `halftone config init`.
pub const DEFAULT_CONFIG: &str = r##"# halftone configuration
# Every value is optional; command-line flags take precedence.

[halftone]
# Contrast multiplier around mid-gray
contrast = 1.0
# Brightness offset (-255..255)
brightness = 0
# Rectangle width in pixels
dot_size = 4
# Gap between cells in pixels
dot_spacing = 2
# Maximum rectangle height as a multiple of the cell size
dot_density = 1.0
# Rectangles shorter than this are skipped
min_height = 1
# Height ratio of the short columns (>= 0.1)
tall_ratio = 0.6
color = "#000000"
background = "#ffffff"

[canvas]
# Images are scaled to fit inside this box
max_width = 800
max_height = 600

[pattern]
rectangle_width = 10
tall_height = 28
short_height = 16
horizontal_gap = 9
vertical_gap = 45

[animation]
sensitivity = 2.0
falloff_size = 0.7
# Transition duration in seconds
animation_speed = 0.1

[colors]
primary = "#2e4b9c"
secondary = "#1e3a8a"
background = "#0f172a"

[output]
# dir = "."
"##;
