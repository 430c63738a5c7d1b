//! Command execution for the roman-semver binary

pub mod commands;

pub use commands::{run, Command, CommandOutput};
