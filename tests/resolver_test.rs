use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;

use modgen::config::{parse_template, Defaults, VariableSpec};
use modgen::error::{Error, Result};
use modgen::prompt::{DefaultsPrompter, Prompter};
use modgen::resolver::{parse_answers, resolve_variables, Answers};
use tempfile::TempDir;

/// Answers prompts from a fixed script. `None` accepts the offered default.
struct ScriptedPrompter {
    answers: RefCell<VecDeque<Option<String>>>,
    asked: RefCell<Vec<(String, Option<String>)>>,
}

impl ScriptedPrompter {
    fn new(answers: &[Option<&str>]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().map(|a| a.map(str::to_string)).collect()),
            asked: RefCell::new(Vec::new()),
        }
    }

    fn asked(&self) -> Vec<(String, Option<String>)> {
        self.asked.borrow().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, message: &str, default: Option<&str>) -> Result<String> {
        self.asked.borrow_mut().push((message.to_string(), default.map(str::to_string)));
        match self.answers.borrow_mut().pop_front() {
            Some(Some(answer)) => Ok(answer),
            Some(None) => Ok(default.unwrap_or_default().to_string()),
            None => Err(Error::PromptError("no more scripted answers".to_string())),
        }
    }
}

fn split_defaults(yaml: &str) -> Defaults {
    serde_yaml::from_str(yaml).unwrap()
}

#[test]
fn test_flat_list_prompts_values_in_order() {
    let prompt = ScriptedPrompter::new(&[Some("users"), Some("User")]);
    let spec = VariableSpec::FlatList(vec!["moduleName".to_string(), "entityName".to_string()]);

    let variables = resolve_variables(&prompt, &spec, None, None, &Answers::new()).unwrap();

    assert_eq!(variables.keys().collect::<Vec<_>>(), ["moduleName", "entityName"]);
    assert_eq!(variables["moduleName"], "users");
    assert_eq!(variables["entityName"], "User");
    assert_eq!(prompt.asked()[0].0, "Please provide a value for moduleName");
}

#[test]
fn test_accepted_default_is_bound_exactly() {
    let prompt = ScriptedPrompter::new(&[None]);
    let spec = VariableSpec::Split { filepaths: vec![], value: vec!["moduleName".to_string()] };
    let defaults = split_defaults("value:\n  moduleName: \"  padded default \"\n");

    let variables =
        resolve_variables(&prompt, &spec, Some(&defaults), None, &Answers::new()).unwrap();

    assert_eq!(variables["moduleName"], "  padded default ");
    assert_eq!(prompt.asked()[0].1.as_deref(), Some("  padded default "));
}

#[test]
fn test_filepath_variables_resolve_first_and_bind_content() {
    let templates = TempDir::new().unwrap();
    fs::write(templates.path().join("entity.ts"), "type User = { id: string };").unwrap();

    let prompt = ScriptedPrompter::new(&[None, Some("User")]);
    let spec = VariableSpec::Split {
        filepaths: vec!["entityTypeDef".to_string()],
        value: vec!["entityName".to_string()],
    };
    let defaults = split_defaults("filepaths:\n  entityTypeDef: entity.ts\n");

    let variables = resolve_variables(
        &prompt,
        &spec,
        Some(&defaults),
        Some(templates.path()),
        &Answers::new(),
    )
    .unwrap();

    let asked = prompt.asked();
    assert_eq!(asked[0].0, "Please provide a file path for entityTypeDef");
    assert_eq!(asked[0].1.as_deref(), Some("entity.ts"));
    assert_eq!(asked[1].0, "Please provide a value for entityName");
    assert_eq!(variables.keys().collect::<Vec<_>>(), ["entityTypeDef", "entityName"]);
    assert_eq!(variables["entityTypeDef"], "type User = { id: string };");
}

#[test]
fn test_missing_filepath_variable_stops_resolution() {
    let templates = TempDir::new().unwrap();
    let prompt = ScriptedPrompter::new(&[Some("missing.ts"), Some("never asked")]);
    let spec = VariableSpec::Split {
        filepaths: vec!["entityTypeDef".to_string()],
        value: vec!["entityName".to_string()],
    };

    let err = resolve_variables(&prompt, &spec, None, Some(templates.path()), &Answers::new())
        .unwrap_err();

    match err {
        Error::VariableFileNotFound { path } => {
            assert_eq!(path, templates.path().join("missing.ts"))
        }
        other => panic!("Expected VariableFileNotFound, got {other:?}"),
    }
    assert_eq!(prompt.asked().len(), 1);
}

#[test]
fn test_directory_answer_is_not_a_variable_file() {
    let templates = TempDir::new().unwrap();
    fs::create_dir_all(templates.path().join("types")).unwrap();
    let prompt = ScriptedPrompter::new(&[Some("types")]);
    let spec = VariableSpec::Split { filepaths: vec!["typeDef".to_string()], value: vec![] };

    let err = resolve_variables(&prompt, &spec, None, Some(templates.path()), &Answers::new())
        .unwrap_err();

    match err {
        Error::VariableFileNotFound { path } => assert_eq!(path, templates.path().join("types")),
        other => panic!("Expected VariableFileNotFound, got {other:?}"),
    }
}

#[test]
fn test_empty_answer_without_default_is_bound() {
    let prompt = ScriptedPrompter::new(&[Some("")]);
    let spec = VariableSpec::FlatList(vec!["suffix".to_string()]);

    let variables = resolve_variables(&prompt, &spec, None, None, &Answers::new()).unwrap();

    assert_eq!(variables["suffix"], "");
    assert_eq!(prompt.asked(), vec![("Please provide a value for suffix".to_string(), None)]);
}

#[test]
fn test_numeric_default_is_offered_as_text() {
    let prompt = ScriptedPrompter::new(&[None]);
    let template = parse_template(
        "configs:\n  defaults:\n    value:\n      port: 8080\n\
         variables:\n  value: [port]\nfolders: []\n",
        "port.yaml",
    )
    .unwrap();

    let variables = resolve_variables(
        &prompt,
        &template.variables,
        template.defaults(),
        None,
        &Answers::new(),
    )
    .unwrap();

    assert_eq!(variables["port"], "8080");
}

#[test]
fn test_preloaded_answers_skip_prompts() {
    let prompt = ScriptedPrompter::new(&[Some("typed")]);
    let spec = VariableSpec::FlatList(vec!["a".to_string(), "b".to_string()]);
    let preloaded = parse_answers(r#"{"a": "from stdin"}"#).unwrap();

    let variables = resolve_variables(&prompt, &spec, None, None, &preloaded).unwrap();

    assert_eq!(variables["a"], "from stdin");
    assert_eq!(variables["b"], "typed");
    assert_eq!(prompt.asked().len(), 1);
}

#[test]
fn test_defaults_prompter_only_asks_without_default() {
    let fallback = ScriptedPrompter::new(&[Some("typed")]);
    let prompt = DefaultsPrompter::new(&fallback);
    let spec = VariableSpec::FlatList(vec!["a".to_string(), "b".to_string()]);
    let defaults: Defaults = serde_yaml::from_str("a: default-a\n").unwrap();

    let variables =
        resolve_variables(&prompt, &spec, Some(&defaults), None, &Answers::new()).unwrap();

    assert_eq!(variables["a"], "default-a");
    assert_eq!(variables["b"], "typed");
    assert_eq!(fallback.asked(), vec![("Please provide a value for b".to_string(), None)]);
}

#[test]
fn test_duplicate_names_across_categories_are_rejected() {
    let result = parse_template(
        "variables:\n  filepaths: [name]\n  value: [name]\nfolders: []\n",
        "dup.yaml",
    );
    match result {
        Err(Error::DuplicateVariable { name }) => assert_eq!(name, "name"),
        other => panic!("Expected DuplicateVariable, got {other:?}"),
    }
}

#[test]
fn test_unvalidated_duplicate_keeps_last_value() {
    // Without load-time validation the value binding replaces the file content.
    let templates = TempDir::new().unwrap();
    fs::write(templates.path().join("x.txt"), "from file").unwrap();
    let prompt = ScriptedPrompter::new(&[Some("x.txt"), Some("typed")]);
    let spec =
        VariableSpec::Split { filepaths: vec!["x".to_string()], value: vec!["x".to_string()] };

    let variables =
        resolve_variables(&prompt, &spec, None, Some(templates.path()), &Answers::new()).unwrap();

    assert_eq!(variables.len(), 1);
    assert_eq!(variables["x"], "typed");
}

#[test]
fn test_parse_answers_formats() {
    let answers = parse_answers("moduleName: users\ncount: 3\nenabled: true\n").unwrap();
    assert_eq!(answers["moduleName"], "users");
    assert_eq!(answers["count"], "3");
    assert_eq!(answers["enabled"], "true");

    assert!(parse_answers("  \n").unwrap().is_empty());
    assert!(matches!(parse_answers("nested: [1, 2]"), Err(Error::AnswersError(_))));
}
