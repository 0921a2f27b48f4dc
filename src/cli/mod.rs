//! Command line interface for the Glossa binary.

pub mod args;
pub mod commands;
