//! CLI command handlers for `sapchart`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod chart;
pub mod config;
