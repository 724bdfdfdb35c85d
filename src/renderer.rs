//! Placeholder rendering for modgen.
//! Replaces `$name` tokens in folder names, file names and file contents.
use crate::constants::PLACEHOLDER_PREFIX;
use indexmap::IndexMap;
use regex::{NoExpand, Regex};

/// Resolved variable mapping, in resolution order.
pub type Variables = IndexMap<String, String>;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given variables.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `variables` - Resolved variables used for substitution
    ///
    /// # Returns
    /// * `String` - Rendered string; unknown tokens are left untouched
    fn render(&self, template: &str, variables: &Variables) -> String;
}

/// Renderer for literal `$name` placeholders.
///
/// Keys are applied one after another, each to the output of the previous one,
/// in the order of the variable mapping. A value that contains the token of a
/// key applied later is therefore substituted again. Tokens match as plain
/// prefixes, so `$name` also rewrites the start of `$nameExtra`.
#[derive(Debug, Default)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }

    fn token_pattern(key: &str) -> Regex {
        let pattern = format!(r"\{}{}", PLACEHOLDER_PREFIX, regex::escape(key));
        // The key is escaped, so the pattern always compiles.
        Regex::new(&pattern).unwrap_or_else(|_| unreachable!("invalid pattern {pattern}"))
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    fn render(&self, template: &str, variables: &Variables) -> String {
        variables.iter().fold(template.to_string(), |result, (key, value)| {
            Self::token_pattern(key)
                .replace_all(&result, NoExpand(value))
                .into_owned()
        })
    }
}
