use super::intrinsics::normalize_yaml_value;
use super::TemplateError;
use serde_json::Value;

pub fn parse_yaml(input: &str) -> Result<Value, TemplateError> {
    let mut yaml_value: serde_yaml::Value =
        serde_yaml::from_str(input).map_err(|err| TemplateError::Parse {
            reason: format!("yaml parse failed: {err}"),
        })?;

    // `<<: *anchor` keys are resolved before the tree is narrowed.
    yaml_value
        .apply_merge()
        .map_err(|err| TemplateError::Parse {
            reason: format!("yaml merge failed: {err}"),
        })?;

    normalize_yaml_value(yaml_value).map_err(|reason| TemplateError::Parse {
        reason: format!("yaml-to-json conversion failed: {reason}"),
    })
}
