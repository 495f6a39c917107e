mod intrinsics;
mod json;
mod yaml;

use crate::documents::Template;
use crate::narrow::narrow_template;
use asl_core::FieldPath;
use serde_json::Value;

pub use intrinsics::normalize_yaml_value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateFormat {
    #[default]
    Auto,
    Json,
    Yaml,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template parse failed: {reason}")]
    Parse { reason: String },
    #[error("malformed template at {path}: {reason}")]
    MalformedTemplate { path: FieldPath, reason: String },
}

impl TemplateError {
    pub(crate) fn malformed(path: FieldPath, reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            path,
            reason: reason.into(),
        }
    }
}

/// Parses template text into an untyped tree with CloudFormation short-form
/// tags already rewritten into their `Fn::*` / `Ref` long forms.
pub fn parse_template_value(input: &str, format: TemplateFormat) -> Result<Value, TemplateError> {
    match format {
        TemplateFormat::Auto => {
            if looks_like_json(input) {
                json::parse_json(input)
            } else {
                yaml::parse_yaml(input)
            }
        }
        TemplateFormat::Json => json::parse_json(input),
        TemplateFormat::Yaml => yaml::parse_yaml(input),
    }
}

pub fn parse_template(input: &str, format: TemplateFormat) -> Result<Template, TemplateError> {
    let value = parse_template_value(input, format)?;
    narrow_template(&value)
}

fn looks_like_json(input: &str) -> bool {
    input.trim_start().starts_with('{')
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
