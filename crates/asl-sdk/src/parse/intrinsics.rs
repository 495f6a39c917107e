use serde_json::{json, Map, Value};
use serde_yaml::value::TaggedValue;

/// Converts a YAML tree into JSON, rewriting CloudFormation short-form tags.
///
/// `!GetAtt A.B` becomes `{"Fn::GetAtt": ["A", "B"]}`, `!Ref x` becomes
/// `{"Ref": x}` and every other `!Name v` becomes `{"Fn::Name": v}`.
pub fn normalize_yaml_value(value: serde_yaml::Value) -> Result<Value, String> {
    match value {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(value) => Ok(Value::Bool(value)),
        serde_yaml::Value::Number(number) => {
            serde_json::to_value(number).map_err(|err| err.to_string())
        }
        serde_yaml::Value::String(value) => Ok(Value::String(value)),
        serde_yaml::Value::Sequence(items) => items
            .into_iter()
            .map(normalize_yaml_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, normalize_yaml_value(value)?);
            }
            Ok(Value::Object(object))
        }
        serde_yaml::Value::Tagged(tagged) => normalize_tagged(*tagged),
    }
}

fn normalize_tagged(tagged: TaggedValue) -> Result<Value, String> {
    let TaggedValue { tag, value } = tagged;
    let tag = tag.to_string();
    let name = tag.strip_prefix('!').unwrap_or(tag.as_str());
    if name.is_empty() {
        return Err("empty YAML tag".to_string());
    }

    match (name, value) {
        ("GetAtt", serde_yaml::Value::String(dotted)) => {
            let parts = match dotted.split_once('.') {
                Some((resource, attribute)) => vec![resource.to_string(), attribute.to_string()],
                None => vec![dotted],
            };
            Ok(json!({ "Fn::GetAtt": parts }))
        }
        ("Ref", value) => Ok(json!({ "Ref": normalize_yaml_value(value)? })),
        (name, value) => {
            let mut object = Map::new();
            object.insert(format!("Fn::{name}"), normalize_yaml_value(value)?);
            Ok(Value::Object(object))
        }
    }
}

fn mapping_key(key: serde_yaml::Value) -> Result<String, String> {
    match key {
        serde_yaml::Value::String(key) => Ok(key),
        serde_yaml::Value::Bool(key) => Ok(key.to_string()),
        serde_yaml::Value::Number(key) => Ok(key.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        other => Err(format!("unsupported mapping key: {other:?}")),
    }
}

#[cfg(test)]
#[path = "intrinsics_test.rs"]
mod tests;
