use crate::documents::{
    FunctionResource, RawResource, ResolvedResource, StateMachineResource, Template,
    FUNCTION_TYPE, STATE_MACHINE_TYPE,
};
use crate::parse::TemplateError;
use asl_core::FieldPath;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A closed resource shape that a [`RawResource`] can be narrowed into.
pub trait ResourceVariant: Sized {
    const TYPE: &'static str;

    fn from_properties(properties: Option<&Value>) -> Result<Self, String>;

    fn into_resolved(self) -> ResolvedResource;
}

impl ResourceVariant for StateMachineResource {
    const TYPE: &'static str = STATE_MACHINE_TYPE;

    fn from_properties(properties: Option<&Value>) -> Result<Self, String> {
        match properties {
            Some(properties @ Value::Object(_)) => {
                Self::deserialize(properties).map_err(|err| err.to_string())
            }
            Some(_) => Err("Properties must be a mapping".to_string()),
            None => Err("missing Properties".to_string()),
        }
    }

    fn into_resolved(self) -> ResolvedResource {
        ResolvedResource::StateMachine(self)
    }
}

impl ResourceVariant for FunctionResource {
    const TYPE: &'static str = FUNCTION_TYPE;

    fn from_properties(_properties: Option<&Value>) -> Result<Self, String> {
        Ok(FunctionResource)
    }

    fn into_resolved(self) -> ResolvedResource {
        ResolvedResource::Function(self)
    }
}

fn narrow_as<V: ResourceVariant>(raw: &RawResource) -> Result<ResolvedResource, String> {
    if raw.kind != V::TYPE {
        return Err(format!("type `{}` is not `{}`", raw.kind, V::TYPE));
    }
    V::from_properties(raw.properties.as_ref()).map(V::into_resolved)
}

/// Tries every known variant in priority order and keeps the first match.
pub fn narrow_resource(raw: &RawResource) -> Option<ResolvedResource> {
    narrow_as::<StateMachineResource>(raw)
        .or_else(|_| narrow_as::<FunctionResource>(raw))
        .ok()
}

/// Keeps the entries that match a known variant and silently drops the rest.
pub fn narrow_resources(
    resources: &BTreeMap<String, RawResource>,
) -> BTreeMap<String, ResolvedResource> {
    let mut narrowed = BTreeMap::new();
    for (name, raw) in resources {
        match narrow_resource(raw) {
            Some(resource) => {
                narrowed.insert(name.clone(), resource);
            }
            None => {
                tracing::debug!(
                    resource = %name,
                    kind = %raw.kind,
                    "dropping unrecognized resource"
                );
            }
        }
    }
    narrowed
}

/// Narrows a parsed template tree.
///
/// Only structural breakage is an error: a non-mapping document, a
/// non-mapping `Resources`, or an entry without a `Type` string.
pub fn narrow_template(value: &Value) -> Result<Template, TemplateError> {
    let root = FieldPath::root();
    let object = value
        .as_object()
        .ok_or_else(|| TemplateError::malformed(root.clone(), "template must be a mapping"))?;

    let resources = match object.get("Resources") {
        None | Some(Value::Null) => return Ok(Template::default()),
        Some(Value::Object(resources)) => resources,
        Some(_) => {
            return Err(TemplateError::malformed(
                root.key("Resources"),
                "Resources must be a mapping",
            ))
        }
    };

    let raw = read_raw_resources(resources, &root.key("Resources"))?;
    Ok(Template::from_resources(narrow_resources(&raw)))
}

fn read_raw_resources(
    resources: &Map<String, Value>,
    path: &FieldPath,
) -> Result<BTreeMap<String, RawResource>, TemplateError> {
    let mut raw = BTreeMap::new();
    for (name, entry) in resources {
        let entry_path = path.key(name.as_str());
        let entry = entry.as_object().ok_or_else(|| {
            TemplateError::malformed(entry_path.clone(), "resource must be a mapping")
        })?;
        let kind = match entry.get("Type") {
            Some(Value::String(kind)) if !kind.is_empty() => kind.clone(),
            Some(Value::String(_)) => {
                return Err(TemplateError::malformed(
                    entry_path.key("Type"),
                    "resource Type must not be empty",
                ))
            }
            _ => {
                return Err(TemplateError::malformed(
                    entry_path.key("Type"),
                    "resource must have a string Type",
                ))
            }
        };
        raw.insert(
            name.clone(),
            RawResource {
                kind,
                properties: entry.get("Properties").cloned(),
            },
        );
    }
    Ok(raw)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
