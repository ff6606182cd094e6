//! SVG renderer for computed chart layouts
//!
//! Produces a self-contained SVG document with no external references, so
//! the output renders anywhere and can be rasterized offline.

use super::layout::ChartLayout;
use super::theme::Theme;
use std::fmt::Write;

/// Corner radius of course boxes and legend swatches (layout units)
const CORNER_RADIUS: f32 = 0.08;
/// Side length of a legend swatch (layout units)
const SWATCH_SIZE: f32 = 0.35;
/// Line height multiplier for wrapped labels
const LINE_HEIGHT: f32 = 1.25;

/// Render a computed layout as an SVG document
///
/// `scale` converts layout units to pixels (e.g. 40.0 gives a 1120px-wide
/// chart for a four-year plan).
#[must_use]
pub fn render_svg(layout: &ChartLayout, theme: &Theme, scale: f32) -> String {
    let width = layout.width * scale;
    let height = layout.height * scale;
    let mut svg = String::new();

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width:.0}\" height=\"{height:.0}\" viewBox=\"0 0 {width:.2} {height:.2}\">"
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    );

    // Chart title
    svg.push_str(&text_element(
        layout.title.x * scale,
        layout.title.y * scale,
        &layout.title.text,
        theme.title_font_size * scale,
        theme,
        true,
    ));

    // Year headers and the rule beneath them
    for header in &layout.year_headers {
        svg.push_str(&text_element(
            header.x * scale,
            header.y * scale,
            &header.text,
            theme.header_font_size * scale,
            theme,
            true,
        ));
    }
    let _ = write!(
        svg,
        "<line x1=\"0\" y1=\"{y:.2}\" x2=\"{x2:.2}\" y2=\"{y:.2}\" stroke=\"{color}\" stroke-width=\"1\"/>",
        y = layout.header_rule_y * scale,
        x2 = width,
        color = theme.rule_color
    );

    // Column separators
    for &x in &layout.separators {
        let _ = write!(
            svg,
            "<line x1=\"{x:.2}\" y1=\"{y1:.2}\" x2=\"{x:.2}\" y2=\"{y2:.2}\" stroke=\"{color}\" stroke-width=\"1\"/>",
            x = x * scale,
            y1 = layout.grid_top * scale,
            y2 = layout.grid_bottom * scale,
            color = theme.rule_color
        );
    }

    // Course boxes with centered wrapped labels
    for course_box in &layout.boxes {
        let _ = write!(
            svg,
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{r:.2}\" ry=\"{r:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1\"/>",
            x = course_box.x * scale,
            y = course_box.y * scale,
            w = course_box.width * scale,
            h = course_box.height * scale,
            r = CORNER_RADIUS * scale,
            fill = Theme::color(&course_box.category),
            stroke = theme.box_border
        );

        let center_x = (course_box.x + course_box.width / 2.0) * scale;
        let center_y = (course_box.y + course_box.height / 2.0) * scale;
        svg.push_str(&wrapped_text_element(
            center_x,
            center_y,
            &course_box.lines,
            theme.font_size * scale,
            theme,
        ));
    }

    // Legend: heading plus one swatch per recognized category
    svg.push_str(&text_element(
        layout.legend_title.x * scale,
        layout.legend_title.y * scale,
        &layout.legend_title.text,
        theme.font_size * scale,
        theme,
        true,
    ));
    for entry in &layout.legend {
        let swatch = SWATCH_SIZE * scale;
        let _ = write!(
            svg,
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{s:.2}\" height=\"{s:.2}\" rx=\"{r:.2}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"1\"/>",
            x = entry.x * scale,
            y = entry.y * scale - swatch / 2.0,
            s = swatch,
            r = CORNER_RADIUS * scale / 2.0,
            fill = Theme::color(&entry.category),
            stroke = theme.box_border
        );
        let font = theme.font_size * scale;
        let _ = write!(
            svg,
            "<text x=\"{x:.2}\" y=\"{y:.2}\" font-family=\"{family}\" font-size=\"{font:.2}\" fill=\"{fill}\">{label}</text>",
            x = entry.x * scale + swatch * 1.4,
            y = entry.y * scale + font * 0.35,
            family = theme.font_family,
            fill = theme.text_color,
            label = escape_xml(entry.category.label())
        );
    }

    svg.push_str("</svg>");
    svg
}

/// A single line of centered text
fn text_element(x: f32, y: f32, text: &str, font_size: f32, theme: &Theme, bold: bool) -> String {
    let weight = if bold { " font-weight=\"bold\"" } else { "" };
    format!(
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{family}\" font-size=\"{font_size:.2}\"{weight} fill=\"{fill}\">{content}</text>",
        family = theme.font_family,
        fill = theme.text_color,
        content = escape_xml(text)
    )
}

/// Multi-line centered text built from tspans, vertically centered on `y`
fn wrapped_text_element(x: f32, y: f32, lines: &[String], font_size: f32, theme: &Theme) -> String {
    let line_height = font_size * LINE_HEIGHT;
    let total_height = lines.len() as f32 * line_height;
    let start_y = y - total_height / 2.0 + font_size;

    let mut text = format!(
        "<text x=\"{x:.2}\" y=\"{start_y:.2}\" text-anchor=\"middle\" font-family=\"{family}\" font-size=\"{font_size:.2}\" fill=\"{fill}\">",
        family = theme.font_family,
        fill = theme.text_color
    );
    for (idx, line) in lines.iter().enumerate() {
        let dy = if idx == 0 { 0.0 } else { line_height };
        let _ = write!(
            text,
            "<tspan x=\"{x:.2}\" dy=\"{dy:.2}\">{}</tspan>",
            escape_xml(line)
        );
    }
    text.push_str("</text>");
    text
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
