//! Common constants used throughout the modgen application.

/// Template description used when no path is given on the command line
pub const DEFAULT_TEMPLATE_FILE: &str = "./mgrc.yaml";

/// Command keyword that selects the default (or a custom) template description
pub const ADD_MODULE_COMMAND: &str = "add-module";

/// Prefix marking a placeholder token inside names and contents
pub const PLACEHOLDER_PREFIX: char = '$';
