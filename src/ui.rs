//! Terminal output for the roman-semver binary.

use console::style;

use crate::cli::CommandOutput;

/// Print an error message with a red prefix.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print the reason a `valid` command answered `false`.
pub fn display_rejected(message: &str) {
    eprintln!("{} {}", style("INVALID:").yellow().bold(), message);
}

/// Text written to stdout for a command; unstyled so it can be piped.
pub fn stdout_text(output: &CommandOutput) -> &str {
    &output.text
}

/// Print the outcome of a command.
///
/// The answer always goes to stdout; a rejection reason follows on stderr.
pub fn display_output(output: &CommandOutput) {
    println!("{}", stdout_text(output));
    if let Some(reason) = &output.reason {
        display_rejected(reason);
    }
}
