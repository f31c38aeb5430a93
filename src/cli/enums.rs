//! CLI enum types.

use clap::ValueEnum;

use halftone::export::ExportFormat;

/// Which artifacts `render` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Png,
    Svg,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn formats(self) -> &'static [ExportFormat] {
        match self {
            OutputFormat::Png => &[ExportFormat::Png],
            OutputFormat::Svg => &[ExportFormat::Svg],
            OutputFormat::Both => &[ExportFormat::Png, ExportFormat::Svg],
        }
    }
}
