//! Chart theme: category colors, fonts, and line colors

use crate::core::models::Category;

/// Pastel blue used for core courses
const CORE_COLOR: &str = "#AED6F1";
/// Pastel pink used for general education courses
const GEN_ED_COLOR: &str = "#FADBD8";
/// Pastel purple used for combined major/gen-ed courses
const MAJOR_AND_GEN_ED_COLOR: &str = "#D7BDE2";
/// Pastel yellow used for electives
const ELECTIVE_COLOR: &str = "#F9E79F";
/// Gray fallback for unrecognized categories
const FALLBACK_COLOR: &str = "#808080";

/// Visual styling for a rendered chart
///
/// Font sizes are in layout units and scale with the rest of the chart.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Canvas background color
    pub background: String,
    /// Course box border color
    pub box_border: String,
    /// Text color for all labels
    pub text_color: String,
    /// Color for the header rule and column separators
    pub rule_color: String,
    /// Font stack for all text
    pub font_family: String,
    /// Course label font size (layout units)
    pub font_size: f32,
    /// Year header font size (layout units)
    pub header_font_size: f32,
    /// Chart title font size (layout units)
    pub title_font_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "#FFFFFF".to_string(),
            box_border: "#000000".to_string(),
            text_color: "#000000".to_string(),
            rule_color: "#000000".to_string(),
            font_family: "Century Gothic, sans-serif".to_string(),
            font_size: 0.24,
            header_font_size: 0.36,
            title_font_size: 0.42,
        }
    }
}

impl Theme {
    /// Create the default theme with a custom font stack
    #[must_use]
    pub fn with_font_family(font_family: &str) -> Self {
        Self {
            font_family: font_family.to_string(),
            ..Self::default()
        }
    }

    /// Look up the fill color for a category
    ///
    /// Unrecognized categories get the gray fallback color; this never fails.
    #[must_use]
    pub const fn color(category: &Category) -> &'static str {
        match category {
            Category::Core => CORE_COLOR,
            Category::GenEd => GEN_ED_COLOR,
            Category::MajorAndGenEd => MAJOR_AND_GEN_ED_COLOR,
            Category::Elective => ELECTIVE_COLOR,
            Category::Other(_) => FALLBACK_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category_colors() {
        assert_eq!(Theme::color(&Category::Core), "#AED6F1");
        assert_eq!(Theme::color(&Category::GenEd), "#FADBD8");
        assert_eq!(Theme::color(&Category::MajorAndGenEd), "#D7BDE2");
        assert_eq!(Theme::color(&Category::Elective), "#F9E79F");
    }

    #[test]
    fn test_unknown_category_falls_back_to_gray() {
        let category = Category::Other("Internship".to_string());
        assert_eq!(Theme::color(&category), "#808080");
    }

    #[test]
    fn test_color_is_deterministic() {
        assert_eq!(Theme::color(&Category::Core), Theme::color(&Category::Core));
    }
}
