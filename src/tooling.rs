//! Tooling & Integration Layer
//!
//! Command-line front end over the tree builder and renderers.

pub mod cli;

pub use cli::{Cli, CliContext, Commands, ConfigCommands, ScanArgs};
