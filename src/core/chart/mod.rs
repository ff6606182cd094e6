//! Chart rendering module
//!
//! Turns a loaded [`Program`](crate::core::models::Program) into a static
//! year-by-year chart: deterministic layout first, then an SVG document,
//! optionally rasterized to PNG.

pub mod layout;
pub mod png;
pub mod svg;
pub mod theme;

pub use layout::{layout_program, ChartLayout, CourseBox};
pub use png::write_png;
pub use svg::render_svg;
pub use theme::Theme;

use std::fmt;
use std::str::FromStr;

/// Supported chart output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartFormat {
    /// Self-contained SVG document
    Svg,
    /// PNG raster image (SVG rasterized via resvg)
    Png,
}

impl ChartFormat {
    /// Get the file extension for this format
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

impl FromStr for ChartFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            _ => Err(format!("Unknown chart format: {s}")),
        }
    }
}

impl fmt::Display for ChartFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Png => write!(f, "png"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_parsing() {
        assert_eq!(ChartFormat::from_str("svg"), Ok(ChartFormat::Svg));
        assert_eq!(ChartFormat::from_str("PNG"), Ok(ChartFormat::Png));
        assert!(ChartFormat::from_str("pdf").is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(ChartFormat::Svg.extension(), "svg");
        assert_eq!(ChartFormat::Png.extension(), "png");
    }
}
