//! Command-line front end for the `lgraph` binary.

pub mod commands;

pub use commands::{FilterOptions, GraphScript, ScriptLink};
