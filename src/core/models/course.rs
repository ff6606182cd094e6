//! Course and category models

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a course, determining its display color
///
/// Categories round-trip through their display labels ("Core", "Gen Ed",
/// "Major & Gen Ed", "Elective"). Any other label is preserved in
/// [`Category::Other`] and renders with the fallback color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Core program requirement
    Core,
    /// General education requirement
    GenEd,
    /// Counts toward both the major and general education
    MajorAndGenEd,
    /// Free elective
    Elective,
    /// Unrecognized category label (kept verbatim)
    Other(String),
}

impl Category {
    /// The recognized categories, in legend order
    pub const KNOWN: [Self; 4] = [Self::Core, Self::GenEd, Self::MajorAndGenEd, Self::Elective];

    /// Get the display label for this category
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Core => "Core",
            Self::GenEd => "Gen Ed",
            Self::MajorAndGenEd => "Major & Gen Ed",
            Self::Elective => "Elective",
            Self::Other(label) => label,
        }
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        match label.trim() {
            "Core" => Self::Core,
            "Gen Ed" => Self::GenEd,
            "Major & Gen Ed" => Self::MajorAndGenEd,
            "Elective" => Self::Elective,
            _ => Self::Other(label),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents a single course entry in an academic plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Intro to Programming")
    pub name: String,

    /// Credit hours (can be fractional)
    pub credits: f32,

    /// Course category, used for the box color
    pub category: Category,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `name` - Course name as shown in the chart
    /// * `credits` - Credit hours
    /// * `category` - Course category
    #[must_use]
    pub const fn new(name: String, credits: f32, category: Category) -> Self {
        Self {
            name,
            credits,
            category,
        }
    }

    /// Format the credit hours for display, dropping a trailing `.0`
    #[must_use]
    pub fn credits_label(&self) -> String {
        if self.credits.fract() == 0.0 {
            format!("{:.0}", self.credits)
        } else {
            format!("{}", self.credits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_known_labels() {
        assert_eq!(Category::from("Core".to_string()), Category::Core);
        assert_eq!(Category::from("Gen Ed".to_string()), Category::GenEd);
        assert_eq!(
            Category::from("Major & Gen Ed".to_string()),
            Category::MajorAndGenEd
        );
        assert_eq!(Category::from("Elective".to_string()), Category::Elective);
    }

    #[test]
    fn test_category_unknown_label_preserved() {
        let category = Category::from("Internship".to_string());
        assert_eq!(category, Category::Other("Internship".to_string()));
        assert_eq!(category.label(), "Internship");
    }

    #[test]
    fn test_category_label_round_trip() {
        for category in Category::KNOWN {
            let label = String::from(category.clone());
            assert_eq!(Category::from(label), category);
        }
    }

    #[test]
    fn test_course_creation() {
        let course = Course::new("Discrete Structures".to_string(), 4.0, Category::Core);

        assert_eq!(course.name, "Discrete Structures");
        assert!((course.credits - 4.0).abs() < f32::EPSILON);
        assert_eq!(course.category, Category::Core);
    }

    #[test]
    fn test_credits_label_whole() {
        let course = Course::new("Seminar".to_string(), 3.0, Category::Elective);
        assert_eq!(course.credits_label(), "3");
    }

    #[test]
    fn test_credits_label_fractional() {
        let course = Course::new("Lab".to_string(), 1.5, Category::Core);
        assert_eq!(course.credits_label(), "1.5");
    }
}
