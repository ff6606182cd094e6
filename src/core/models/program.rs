//! Program and year models

use super::Course;
use serde::{Deserialize, Serialize};

/// One academic year within a plan, holding its courses in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Year {
    /// Year label (e.g., "1st year")
    pub label: String,

    /// Courses in this year, in the order they appear in the plan file
    pub courses: Vec<Course>,
}

impl Year {
    /// Create a new year with no courses
    #[must_use]
    pub const fn new(label: String) -> Self {
        Self {
            label,
            courses: Vec::new(),
        }
    }

    /// Add a course to the end of this year's list
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Total credit hours for this year
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.courses.iter().map(|c| c.credits).sum()
    }
}

/// A full suggested academic plan for one program of study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    /// Program of study name (e.g., "Information Technology")
    pub name: String,

    /// Years in chart order, left to right
    pub years: Vec<Year>,
}

impl Program {
    /// Create a new program with no years
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            years: Vec::new(),
        }
    }

    /// Add a year to the end of the plan
    pub fn add_year(&mut self, year: Year) {
        self.years.push(year);
    }

    /// Total number of courses across all years
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.years.iter().map(|y| y.courses.len()).sum()
    }

    /// Total credit hours across all years
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.years.iter().map(Year::total_credits).sum()
    }
}
