//! Subcommand logic
//!
//! The commands mirror the CLI subcommands without depending on clap, so
//! they can be run programmatically and tested without spawning a process.

use crate::config::Config;
use crate::error::{CodecError, Result};
use crate::escape::quote;
use crate::roman;
use crate::version::{self, VersionBump};

/// A single invocation of the binary
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    RomanParse { numeral: String },
    RomanStringify { number: String },
    RomanValid { numeral: String },
    SemverParse { version: String },
    SemverCompare { left: String, right: String },
    SemverNext {
        version: String,
        /// Falls back to `version.default_bump` from the configuration
        power: Option<VersionBump>,
    },
    SemverValid { version: String },
}

/// What a command has to report
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    /// `false` for a negative answer of the `valid` commands
    pub success: bool,
    /// Why a `valid` command answered `false`
    pub reason: Option<String>,
}

impl CommandOutput {
    pub fn ok(text: impl Into<String>) -> Self {
        CommandOutput {
            text: text.into(),
            success: true,
            reason: None,
        }
    }

    pub fn rejected(reason: &CodecError) -> Self {
        CommandOutput {
            text: "false".to_string(),
            success: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Runs a command against the given configuration.
///
/// # Returns
/// * `Ok(CommandOutput)` - Text to print; `valid` commands report rejection here
/// * `Err` - Parse or conversion failure of any other command
pub fn run(command: &Command, config: &Config) -> Result<CommandOutput> {
    tracing::debug!(?command, "running command");

    match command {
        Command::RomanParse { numeral } => Ok(CommandOutput::ok(roman::parse(numeral)?.to_string())),
        Command::RomanStringify { number } => {
            let numeral = stringify_number(number)?;
            if config.roman.lowercase {
                Ok(CommandOutput::ok(numeral.to_lowercase()))
            } else {
                Ok(CommandOutput::ok(numeral))
            }
        }
        Command::RomanValid { numeral } => Ok(match roman::parse(numeral) {
            Ok(_) => CommandOutput::ok("true"),
            Err(e) => CommandOutput::rejected(&e),
        }),
        Command::SemverParse { version } => {
            let parsed = version::parse(config.version.strip_prefix(version))?;
            Ok(CommandOutput::ok(describe_version(&parsed)))
        }
        Command::SemverCompare { left, right } => {
            let ordering = version::compare_i8(
                config.version.strip_prefix(left),
                config.version.strip_prefix(right),
            )?;
            Ok(CommandOutput::ok(ordering.to_string()))
        }
        Command::SemverNext { version, power } => {
            let power = power.unwrap_or_else(|| {
                tracing::debug!(
                    default = %config.version.default_bump,
                    "no version part given, using configured default"
                );
                config.version.default_bump
            });
            let next = version::next(config.version.strip_prefix(version), power)?;
            Ok(CommandOutput::ok(next))
        }
        Command::SemverValid { version } => {
            Ok(match version::parse(config.version.strip_prefix(version)) {
                Ok(_) => CommandOutput::ok("true"),
                Err(e) => CommandOutput::rejected(&e),
            })
        }
    }
}

/// Integers go through [`roman::stringify`], anything else numeric through
/// [`roman::stringify_float`] so fractions get the integer-only error.
fn stringify_number(number: &str) -> Result<String> {
    let trimmed = number.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return roman::stringify(n);
    }
    match trimmed.parse::<f64>() {
        Ok(n) => roman::stringify_float(n),
        Err(_) => Err(CodecError::value(format!("{} is not a number", quote(number)))),
    }
}

fn describe_version(version: &version::Version) -> String {
    let mut lines = vec![
        format!("major: {}", version.major),
        format!("minor: {}", version.minor),
        format!("patch: {}", version.patch),
    ];
    if let Some(prerelease) = &version.prerelease {
        lines.push(format!("prerelease: {}", prerelease));
    }
    if let Some(build) = &version.build {
        lines.push(format!("build: {}", build));
    }
    lines.join("\n")
}
