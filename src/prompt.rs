//! Operator interaction for modgen.
//! Prompts are line oriented: one request per variable, with an optional
//! pre-filled default.

use crate::error::{Error, Result};
use dialoguer::Input;

/// Source of operator answers.
pub trait Prompter {
    /// Requests a single line of text.
    ///
    /// # Arguments
    /// * `message` - Prompt shown to the operator
    /// * `default` - Value used when the operator just presses enter
    fn input(&self, message: &str, default: Option<&str>) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, message: &str, default: Option<&str>) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(message).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input.interact_text().map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Prompter that never asks and answers with the default.
///
/// Variables without a default fall through to `fallback`.
pub struct DefaultsPrompter<'a> {
    fallback: &'a dyn Prompter,
}

impl<'a> DefaultsPrompter<'a> {
    pub fn new(fallback: &'a dyn Prompter) -> Self {
        Self { fallback }
    }
}

impl Prompter for DefaultsPrompter<'_> {
    fn input(&self, message: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(default) => Ok(default.to_string()),
            None => self.fallback.input(message, None),
        }
    }
}
