//! Rule-driven parameter validation.
//!
//! The validator walks the action's rule table in order and builds the
//! validated parameter map the handlers consume. It never fails fast:
//! every violated rule is collected so a single invocation reports all of
//! its problems at once, newline-joined in one [`CliError::Validation`].
//!
//! A field that is absent (or present but empty) and not required is
//! either filled from the rule's default or simply left out of the result;
//! validated maps never carry empty-string placeholders. The result always
//! contains the `action` key.

use crate::libs::config::{self, Action};
use crate::libs::errors::CliError;
use crate::libs::parser::Params;

/// A single validation rule for one parameter field.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Field key in the raw parameter map.
    pub name: &'static str,
    /// Missing or empty input for this field fails validation.
    pub required: bool,
    /// Closed set of allowed values, when the field is restricted.
    pub options: Option<&'static [&'static str]>,
    /// Value filled in when the field is absent and not required.
    pub default: Option<&'static str>,
}

/// Validates raw parameters against the action's rule table.
///
/// Returns the validated map (`action` plus every satisfied, defaulted
/// field) or a [`CliError::Validation`] carrying one message per violated
/// rule.
pub fn build_params(action: Action, params: &Params) -> Result<Params, CliError> {
    let mut errors: Vec<String> = Vec::new();
    let mut validated = Params::new();
    validated.insert("action".to_string(), action.name().to_string());

    for rule in config::rules_for(action) {
        let value = params.get(rule.name).map(String::as_str);
        match value {
            None | Some("") => {
                if rule.required {
                    errors.push(format!("{} is required", rule.name));
                } else if let Some(default) = rule.default {
                    validated.insert(rule.name.to_string(), default.to_string());
                }
            }
            Some(value) => match rule.options {
                Some(options) if !options.contains(&value) => {
                    errors.push(format!(
                        "{} must be one of: {}",
                        rule.name,
                        options.join(", ")
                    ));
                }
                _ => {
                    validated.insert(rule.name.to_string(), value.to_string());
                }
            },
        }
    }

    if !errors.is_empty() {
        return Err(CliError::Validation(errors.join("\n")));
    }

    Ok(validated)
}
