//! Error handling for the exgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for exgen operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents a registry line that matches no grammar rule in strict mode
    #[error("Parse error at line {line}: {message}.")]
    ParseError { line: usize, message: String },

    /// Requested slug has no entry in the registry
    #[error("Slug '{slug}' not found in registry {registry}.")]
    SlugNotFound { slug: String, registry: String },

    /// Requested template tree does not exist
    #[error("Template '{template}' not found under {templates_dir}.")]
    TemplateNotFound { template: String, templates_dir: String },

    /// Destination already exists; carries a collision-free alternative
    #[error("Exercise '{slug}' already exists at {dest}. Suggestion: use '{suggestion}'.")]
    DestinationExists { slug: String, dest: String, suggestion: String },

    /// Represents errors serializing records for JSON output
    #[error("Serialization error: {0}.")]
    SerdeError(#[from] serde_json::Error),

    /// Repository structure validation failures
    #[error("Missing required files:\n{0}")]
    ValidationError(String),

    /// External build tool failures
    #[error("Build error: {0}.")]
    BuildError(String),
}

/// Convenience type alias for Results with exgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 2 when the
/// destination already exists, 1 for everything else.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("Error: {}", err);
    let code = match err {
        Error::DestinationExists { .. } => 2,
        _ => 1,
    };
    std::process::exit(code);
}
