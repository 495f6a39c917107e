use super::TemplateError;
use serde_json::Value;

pub fn parse_json(input: &str) -> Result<Value, TemplateError> {
    serde_json::from_str::<Value>(input).map_err(|err| TemplateError::Parse {
        reason: format!("json parse failed: {err}"),
    })
}
