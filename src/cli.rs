//! Command-line interface implementation for exgen.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand, ValueEnum};
use std::fmt::Display;
use std::path::PathBuf;

/// Difficulty levels accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Unknown,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Unknown => "unknown",
        };
        write!(f, "{s}")
    }
}

/// Command-line arguments structure for exgen.
#[derive(Parser, Debug)]
#[command(author, version, about = "exgen: exercise generator and repository utilities", long_about = None)]
pub struct Args {
    /// Root of the practice repository
    #[arg(long, global = true, default_value = ".", value_name = "DIR")]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat unrecognized registry lines as hard parse errors
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new exercise from a template
    New(NewArgs),

    /// List questions in the registry
    List(ListArgs),

    /// Validate repository structure (and optionally build)
    Validate(ValidateArgs),
}

/// Arguments for the new command.
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Exercise slug, e.g. strategy-pattern-basics
    #[arg(value_name = "SLUG")]
    pub slug: String,

    /// Take metadata from the registry entry with this slug
    #[arg(long)]
    pub from_registry: bool,

    /// Exercise title (defaults to the title-cased slug)
    #[arg(long)]
    pub title: Option<String>,

    /// Exercise prompt text
    #[arg(long)]
    pub prompt: Option<String>,

    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,

    /// Exercise difficulty
    #[arg(long, value_enum, default_value_t = Difficulty::Unknown)]
    pub difficulty: Difficulty,

    /// Template tree to render
    #[arg(long, default_value = crate::constants::DEFAULT_TEMPLATE)]
    pub template: String,
}

/// Arguments for the list command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Show only questions carrying this tag
    #[arg(long, value_name = "TAG")]
    pub filter_by_tag: Option<String>,

    /// Emit the matching questions as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the validate command.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Also run the Gradle test build
    #[arg(long)]
    pub run_build: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
