//! JSON loader for suggested academic plan (SAP) files
//!
//! Plan files carry a program name and a `SAP` array where each entry is a
//! single-key object mapping a year label to its course list:
//!
//! ```json
//! {
//!   "Program of Study": "Information Technology",
//!   "SAP": [
//!     { "1st year": [ { "course": "Intro to IT", "credits": 3, "type": "Core" } ] }
//!   ]
//! }
//! ```

use crate::core::models::{Category, Course, Program, Year};
use serde::Deserialize;
use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Raw course entry as stored in the plan file
#[derive(Debug, Deserialize)]
struct RawCourse {
    course: String,
    credits: f32,
    #[serde(rename = "type")]
    category: String,
}

/// Raw plan file structure
#[derive(Debug, Deserialize)]
struct RawPlan {
    #[serde(rename = "Program of Study")]
    program: String,
    #[serde(rename = "SAP")]
    sap: Vec<HashMap<String, Vec<RawCourse>>>,
}

/// Parse a plan from a JSON string
///
/// # Errors
/// Returns an error if the JSON is malformed or a `SAP` entry does not hold
/// exactly one year label.
pub fn parse_plan_json(content: &str) -> Result<Program, Box<dyn Error>> {
    let raw: RawPlan = serde_json::from_str(content)?;
    let mut program = Program::new(raw.program);

    for entry in raw.sap {
        if entry.len() != 1 {
            return Err(format!(
                "Expected one year label per SAP entry, found {}",
                entry.len()
            )
            .into());
        }

        // Single-key object; the outer array gives year order
        let (label, raw_courses) = entry
            .into_iter()
            .next()
            .ok_or("Empty SAP entry")?;

        let mut year = Year::new(label);
        for raw_course in raw_courses {
            year.add_course(Course::new(
                raw_course.course,
                raw_course.credits,
                Category::from(raw_course.category),
            ));
        }
        program.add_year(year);
    }

    Ok(program)
}

/// Load a plan JSON file and return the parsed `Program`
///
/// # Arguments
/// * `path` - Path to the plan JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_plan_json<P: AsRef<Path>>(path: P) -> Result<Program, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_plan_json(&content)
}
