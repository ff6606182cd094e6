//! PNG output via SVG rasterization
//!
//! Uses `usvg` to parse the rendered SVG and `resvg` to rasterize it at the
//! SVG's native pixel size.

use std::error::Error;
use std::path::Path;

/// Rasterize an SVG document and write it as a PNG file
///
/// # Arguments
/// * `svg` - Rendered SVG document
/// * `output` - Path of the PNG file to write
/// * `font_family` - Font stack; the first entry becomes the default font
///
/// # Errors
/// Returns an error if the SVG cannot be parsed, the pixmap cannot be
/// allocated, or the file cannot be written.
pub fn write_png(svg: &str, output: &Path, font_family: &str) -> Result<(), Box<dyn Error>> {
    let mut opt = usvg::Options::default();
    opt.font_family = primary_font(font_family);
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or("Failed to allocate pixmap")?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

/// First non-empty entry of a CSS-style font stack
fn primary_font(fonts: &str) -> String {
    fonts
        .split(',')
        .map(|s| s.trim().trim_matches('"'))
        .find(|s| !s.is_empty())
        .unwrap_or("sans-serif")
        .to_string()
}
