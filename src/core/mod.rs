//! Core module for plan loading and chart rendering

pub mod chart;
pub mod loader;
pub mod models;

/// Returns the current version of the `sap-chart` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
