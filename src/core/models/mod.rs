//! Data models for `sap-chart`

pub mod course;
pub mod program;

pub use course::{Category, Course};
pub use program::{Program, Year};
