//! Template description model for modgen.
//! This module defines the structures a template description deserializes into,
//! validates them, and resolves the run settings from the `configs` block.

use crate::content::normalize_path;
use crate::error::{Error, Result};
use indexmap::{IndexMap, IndexSet};
use log::debug;
use serde::{Deserialize, Deserializer};
use std::path::{Path, PathBuf};

/// Root of a template description.
#[derive(Debug, Deserialize)]
pub struct Template {
    /// Optional configuration block
    #[serde(default)]
    pub configs: Option<Configs>,
    /// Variables collected before the tree is generated
    #[serde(default)]
    pub variables: VariableSpec,
    /// Top-level folder descriptions, generated in order
    pub folders: Vec<FolderSpec>,
}

/// The `configs` block of a template description.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Configs {
    /// Output root directory, defaults to the current directory
    pub root_dir: Option<PathBuf>,
    /// Directory that relative content and variable file paths are resolved against
    pub templates_dir: Option<PathBuf>,
    /// Default values offered when prompting
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default values for variables.
///
/// Older descriptions carry a single flat mapping; newer ones split the
/// defaults the same way the variables are split.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Defaults {
    Split(SplitDefaults),
    Flat(IndexMap<String, DefaultValue>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitDefaults {
    #[serde(default)]
    pub filepaths: IndexMap<String, DefaultValue>,
    #[serde(default)]
    pub value: IndexMap<String, DefaultValue>,
}

/// A configured default in its textual form.
///
/// YAML reads `8080` or `true` as numbers and booleans; they are offered to
/// the operator as the text they were written as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultValue(pub String);

impl DefaultValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DefaultValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        scalar_to_string(value).map(DefaultValue).map_err(serde::de::Error::custom)
    }
}

/// Converts a string, number or boolean to the text bound to a variable.
///
/// # Errors
/// * A description of the value if it is null, a sequence or a mapping
pub fn scalar_to_string(value: serde_json::Value) -> std::result::Result<String, String> {
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Bool(b) => Ok(b.to_string()),
        other => Err(format!("expected a string, number or boolean, got {}", other)),
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults::Split(SplitDefaults::default())
    }
}

impl Defaults {
    /// Suggested path for a filepath variable.
    pub fn filepath(&self, name: &str) -> Option<&str> {
        match self {
            Defaults::Split(split) => split.filepaths.get(name),
            Defaults::Flat(flat) => flat.get(name),
        }
        .map(DefaultValue::as_str)
    }

    /// Default for a value variable.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self {
            Defaults::Split(split) => split.value.get(name),
            Defaults::Flat(flat) => flat.get(name),
        }
        .map(DefaultValue::as_str)
    }
}

/// Declaration of the variables a template needs.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VariableSpec {
    /// Plain list of names, each one prompted for directly
    FlatList(Vec<String>),
    /// Variables split by how their value is obtained
    Split {
        /// Variables whose value is the content of an operator-supplied file
        #[serde(default)]
        filepaths: Vec<String>,
        /// Variables whose value is typed in
        #[serde(default)]
        value: Vec<String>,
    },
}

impl Default for VariableSpec {
    fn default() -> Self {
        VariableSpec::FlatList(Vec::new())
    }
}

impl VariableSpec {
    /// Names resolved by reading a file.
    pub fn filepaths(&self) -> &[String] {
        match self {
            VariableSpec::FlatList(_) => &[],
            VariableSpec::Split { filepaths, .. } => filepaths,
        }
    }

    /// Names resolved by direct input.
    pub fn values(&self) -> &[String] {
        match self {
            VariableSpec::FlatList(names) => names,
            VariableSpec::Split { value, .. } => value,
        }
    }
}

/// A folder of the generated tree.
///
/// A folder without a name writes its files straight into the parent path.
#[derive(Debug, Default, Deserialize)]
pub struct FolderSpec {
    pub name: Option<String>,
    #[serde(default)]
    pub files: Vec<FileSpec>,
    #[serde(default)]
    pub folders: Vec<FolderSpec>,
}

/// A file of the generated tree.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSpec {
    pub name: String,
    /// Inline content
    pub content: Option<String>,
    /// Content file, relative to the templates directory
    pub file_path: Option<PathBuf>,
}

impl FileSpec {
    /// Where the content of this file comes from. An external file path takes
    /// precedence over inline content.
    pub fn source(&self) -> ContentSource<'_> {
        match (&self.file_path, &self.content) {
            (Some(path), _) => ContentSource::External(path),
            (None, Some(content)) => ContentSource::Inline(content),
            (None, None) => ContentSource::Empty,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ContentSource<'a> {
    Inline(&'a str),
    External(&'a Path),
    Empty,
}

impl Template {
    /// Checks that every variable name is declared once.
    ///
    /// # Errors
    /// * `Error::DuplicateVariable` for the first name declared twice,
    ///   within a list or across `filepaths` and `value`
    pub fn validate(&self) -> Result<()> {
        let mut seen = IndexSet::new();
        for name in self.variables.filepaths().iter().chain(self.variables.values()) {
            if !seen.insert(name.as_str()) {
                return Err(Error::DuplicateVariable { name: name.clone() });
            }
        }
        Ok(())
    }

    pub fn defaults(&self) -> Option<&Defaults> {
        self.configs.as_ref().map(|configs| &configs.defaults)
    }
}

/// Parses a template description. JSON documents are accepted as well since
/// they are valid YAML.
///
/// # Arguments
/// * `content` - Raw description text
/// * `path` - Path the text was read from, used for error reporting
///
/// # Errors
/// * `Error::ParseError` if the document does not match the expected shape
/// * `Error::DuplicateVariable` if a variable is declared twice
pub fn parse_template<P: AsRef<Path>>(content: &str, path: P) -> Result<Template> {
    let template: Template = serde_yaml::from_str(content).map_err(|source| {
        Error::ParseError { path: path.as_ref().to_path_buf(), source }
    })?;
    template.validate()?;

    debug!(
        "Parsed template with {} filepath and {} value variables, {} top-level folders",
        template.variables.filepaths().len(),
        template.variables.values().len(),
        template.folders.len()
    );

    Ok(template)
}

/// Run settings derived from the `configs` block and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory the top-level folders are generated into
    pub root_dir: PathBuf,
    /// Directory relative content and variable paths are resolved against
    pub templates_dir: Option<PathBuf>,
}

impl Settings {
    /// Resolves the settings against `cwd`.
    ///
    /// # Arguments
    /// * `configs` - Optional configuration block of the template
    /// * `output_dir` - Output directory given on the command line, wins over `rootDir`
    /// * `cwd` - Directory relative paths are resolved against
    pub fn resolve<P: AsRef<Path>>(
        configs: Option<&Configs>,
        output_dir: Option<&Path>,
        cwd: P,
    ) -> Self {
        let cwd = cwd.as_ref();
        let root_dir = output_dir
            .or_else(|| configs.and_then(|c| c.root_dir.as_deref()))
            .map(|dir| normalize_path(cwd.join(dir)))
            .unwrap_or_else(|| normalize_path(cwd));
        let templates_dir = configs
            .and_then(|c| c.templates_dir.as_deref())
            .map(|dir| normalize_path(cwd.join(dir)));

        Self { root_dir, templates_dir }
    }
}
