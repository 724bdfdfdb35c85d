//! Error handling for the modgen application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for modgen operations.
///
/// Every fallible operation returns one of these up to `main`, which is the
/// only place allowed to terminate the process.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template description could not be read
    #[error("Error reading template description '{}': {source}.", path.display())]
    TemplateFileError { path: PathBuf, source: io::Error },

    /// The template description is not a valid document
    #[error("Error parsing template description '{}': {source}.", path.display())]
    ParseError { path: PathBuf, source: serde_yaml::Error },

    /// A variable is declared more than once across `filepaths` and `value`
    #[error("Configuration error: variable '{name}' is declared more than once.")]
    DuplicateVariable { name: String },

    /// A file description points to content that cannot be read
    #[error("Error reading content from file path: {}.", path.display())]
    ContentFileError { path: PathBuf, source: io::Error },

    /// A filepath variable points to a file that does not exist
    #[error("File not found at path: {}.", path.display())]
    VariableFileNotFound { path: PathBuf },

    /// Represents failures while interacting with the operator
    #[error("Prompt error: {0}.")]
    PromptError(String),

    /// Preloaded answers could not be parsed
    #[error("Answers error: {0}.")]
    AnswersError(String),

    /// A directory of the generated tree could not be created
    #[error("Error creating folder '{}': {source}.", path.display())]
    CreateDirError { path: PathBuf, source: io::Error },

    /// A file of the generated tree could not be written
    #[error("Error writing file '{}': {source}.", path.display())]
    WriteError { path: PathBuf, source: io::Error },
}

/// Convenience type alias for Results with modgen's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
