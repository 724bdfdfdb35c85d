//! modgen is a template-driven module scaffolding tool.
//! It reads a declarative folder/file tree, collects variable values from the
//! operator and writes the tree to disk with `$variable` placeholders replaced.

/// Command-line interface module for the modgen application
pub mod cli;

/// Template description model, parsing and run settings
pub mod config;

/// Common constants
pub mod constants;

/// Content loading for file descriptions
pub mod content;

/// Error types and handling for the modgen application
pub mod error;

/// Locating and reading the template description
pub mod loader;

/// Logger initialization
pub mod logger;

/// Tree materialization
/// Renders the folder/file tree and writes it to the output directory
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// `$variable` placeholder substitution
pub mod renderer;

/// Variable resolution from prompts, defaults and preloaded answers
pub mod resolver;
