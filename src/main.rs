use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use roman_semver::cli::{self, Command};
use roman_semver::version::VersionBump;
use roman_semver::{config, ui};

#[derive(Parser)]
#[command(
    name = "roman-semver",
    version,
    about = "Convert roman numerals and compare or bump semantic versions"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Print debug logs to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roman numeral conversions
    #[command(subcommand)]
    Roman(RomanCommands),

    /// Semantic version operations
    #[command(subcommand)]
    Semver(SemverCommands),
}

#[derive(Subcommand)]
enum RomanCommands {
    /// Print the value of a roman numeral
    Parse { numeral: String },
    /// Print the roman numeral of a number in [1..3999]
    Stringify {
        #[arg(allow_hyphen_values = true)]
        number: String,
    },
    /// Check whether a string is a valid roman numeral
    Valid { numeral: String },
}

#[derive(Subcommand)]
enum SemverCommands {
    /// Print the parts of a version
    Parse { version: String },
    /// Print -1, 0 or 1 depending on the precedence of two versions
    Compare { left: String, right: String },
    /// Print the next version, dropping pre-release and build metadata
    Next {
        version: String,
        #[arg(help = "major, minor or patch (defaults to the configured bump)")]
        power: Option<VersionBump>,
    },
    /// Check whether a string is a valid semantic version
    Valid { version: String },
}

impl From<Commands> for Command {
    fn from(commands: Commands) -> Self {
        match commands {
            Commands::Roman(RomanCommands::Parse { numeral }) => Command::RomanParse { numeral },
            Commands::Roman(RomanCommands::Stringify { number }) => {
                Command::RomanStringify { number }
            }
            Commands::Roman(RomanCommands::Valid { numeral }) => Command::RomanValid { numeral },
            Commands::Semver(SemverCommands::Parse { version }) => Command::SemverParse { version },
            Commands::Semver(SemverCommands::Compare { left, right }) => {
                Command::SemverCompare { left, right }
            }
            Commands::Semver(SemverCommands::Next { version, power }) => {
                Command::SemverNext { version, power }
            }
            Commands::Semver(SemverCommands::Valid { version }) => Command::SemverValid { version },
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let command = Command::from(args.command);
    match cli::run(&command, &config) {
        Ok(output) => {
            ui::display_output(&output);
            if !output.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
