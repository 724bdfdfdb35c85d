//! Template description loading for modgen.
//! Works out which description file a run uses and reads it.
use crate::config::{parse_template, Template};
use crate::constants::{ADD_MODULE_COMMAND, DEFAULT_TEMPLATE_FILE};
use crate::content::normalize_path;
use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// How the template description was selected on the command line.
#[derive(Debug, PartialEq, Eq)]
pub enum TemplateSource {
    /// The default description in the working directory
    Default,
    /// `add-module` followed by an explicit description path
    Command(PathBuf),
    /// A description path given directly
    Path(PathBuf),
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateSource::Default => write!(f, "default description '{}'", DEFAULT_TEMPLATE_FILE),
            TemplateSource::Command(path) => {
                write!(f, "{} description '{}'", ADD_MODULE_COMMAND, path.display())
            }
            TemplateSource::Path(path) => write!(f, "description '{}'", path.display()),
        }
    }
}

impl TemplateSource {
    /// Interprets the two optional positional arguments.
    ///
    /// # Arguments
    /// * `command_or_path` - `add-module` or a description path
    /// * `custom` - Description path following `add-module`; ignored otherwise
    pub fn from_args(command_or_path: Option<&str>, custom: Option<&str>) -> Self {
        match command_or_path {
            None => Self::Default,
            Some(ADD_MODULE_COMMAND) => match custom {
                Some(path) => Self::Command(PathBuf::from(path)),
                None => Self::Default,
            },
            Some(path) => Self::Path(PathBuf::from(path)),
        }
    }

    /// Absolute path of the description, relative paths resolved against `cwd`.
    pub fn resolve<P: AsRef<Path>>(&self, cwd: P) -> PathBuf {
        let relative = match self {
            TemplateSource::Default => Path::new(DEFAULT_TEMPLATE_FILE),
            TemplateSource::Command(path) | TemplateSource::Path(path) => path.as_path(),
        };
        normalize_path(cwd.as_ref().join(relative))
    }
}

/// Reads and parses a template description.
///
/// # Errors
/// * `Error::TemplateFileError` if the file cannot be read
/// * `Error::ParseError` if it is not a valid description
/// * `Error::DuplicateVariable` if a variable is declared twice
pub fn load_template<P: AsRef<Path>>(path: P) -> Result<Template> {
    let path = path.as_ref();
    debug!("Loading template description from {}", path.display());
    let content = fs::read_to_string(path)
        .map_err(|source| Error::TemplateFileError { path: path.to_path_buf(), source })?;
    parse_template(&content, path)
}
