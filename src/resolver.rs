//! Variable resolution.
//! Builds the variable mapping used for every substitution of a run, either
//! from operator prompts or from answers preloaded on stdin.

use crate::config::{scalar_to_string, Defaults, VariableSpec};
use crate::content::resolve_template_path;
use crate::error::{Error, Result};
use crate::prompt::Prompter;
use crate::renderer::Variables;
use indexmap::IndexMap;
use log::debug;
use std::io::Read;
use std::path::Path;

/// Answers supplied ahead of time, keyed by variable name.
pub type Answers = IndexMap<String, String>;

/// Parses preloaded answers from a JSON or YAML mapping.
///
/// Numbers and booleans are accepted and bound as their textual form.
///
/// # Errors
/// * `Error::AnswersError` if the input is not a mapping of scalars
pub fn parse_answers(input: &str) -> Result<Answers> {
    if input.trim().is_empty() {
        return Ok(Answers::new());
    }

    // Try parsing as JSON first, explicitly as IndexMap
    let raw: IndexMap<String, serde_json::Value> = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => serde_yaml::from_str(input)
            .map_err(|e| Error::AnswersError(format!("invalid answers format: {}", e)))?,
    };

    raw.into_iter()
        .map(|(key, value)| match scalar_to_string(value) {
            Ok(value) => Ok((key, value)),
            Err(e) => Err(Error::AnswersError(format!("answer for '{}': {}", key, e))),
        })
        .collect()
}

/// Reads preloaded answers from stdin.
pub fn load_from_stdin() -> Result<Answers> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

/// Reads the content bound to a filepath variable.
///
/// # Errors
/// * `Error::VariableFileNotFound` if the resolved path is not an existing file
/// * `Error::ContentFileError` if it exists but cannot be read
fn read_variable_file(path: &str, templates_dir: Option<&Path>) -> Result<String> {
    let resolved = resolve_template_path(path, templates_dir);
    if !resolved.is_file() {
        return Err(Error::VariableFileNotFound { path: resolved });
    }
    debug!("Reading variable file {}", resolved.display());
    std::fs::read_to_string(&resolved)
        .map_err(|source| Error::ContentFileError { path: resolved, source })
}

/// Resolves every declared variable.
///
/// Filepath variables are resolved first, each prompting for a path and
/// binding the content of that file. Value variables follow, each bound to the
/// entered or defaulted string. Preloaded answers replace the prompt for the
/// variables they name.
///
/// # Arguments
/// * `prompt` - Source of operator answers
/// * `spec` - Variable declaration of the template
/// * `defaults` - Configured defaults, if any
/// * `templates_dir` - Directory filepath answers are relative to
/// * `preloaded` - Answers that skip prompting
///
/// # Errors
/// * `Error::VariableFileNotFound` if a filepath answer does not exist
/// * `Error::PromptError` if the operator interaction fails
pub fn resolve_variables(
    prompt: &dyn Prompter,
    spec: &VariableSpec,
    defaults: Option<&Defaults>,
    templates_dir: Option<&Path>,
    preloaded: &Answers,
) -> Result<Variables> {
    let mut variables = Variables::new();

    for name in spec.filepaths() {
        let path = match preloaded.get(name) {
            Some(answer) => answer.clone(),
            None => {
                let default = defaults.and_then(|d| d.filepath(name));
                prompt.input(&format!("Please provide a file path for {}", name), default)?
            }
        };
        let content = read_variable_file(&path, templates_dir)?;
        variables.insert(name.clone(), content);
    }

    for name in spec.values() {
        let value = match preloaded.get(name) {
            Some(answer) => answer.clone(),
            None => {
                let default = defaults.and_then(|d| d.value(name));
                prompt.input(&format!("Please provide a value for {}", name), default)?
            }
        };
        debug!("Resolved {} = {:?}", name, value);
        variables.insert(name.clone(), value);
    }

    Ok(variables)
}
