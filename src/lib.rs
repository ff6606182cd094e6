//! Shared library for `sap-chart`
//! Contains the plan data model, chart layout engine, and renderers used by the CLI

pub mod config;
pub mod core;
pub mod logger;
