use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const STATE_MACHINE_TYPE: &str = "AWS::Serverless::StateMachine";
pub const FUNCTION_TYPE: &str = "AWS::Serverless::Function";

/// A resource entry exactly as it appears under `Resources`, before narrowing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResource {
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "Properties", default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Value>,
}

/// `Fn::GetAtt` pointing at another resource's attribute.
///
/// Only the long form `{"Fn::GetAtt": [resource, attribute]}` is accepted here;
/// the YAML short form `!GetAtt Resource.Attribute` is rewritten into it while
/// parsing the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GetAtt", into = "GetAtt")]
pub struct AttributeReference {
    pub resource_name: String,
    pub attribute_name: String,
}

impl AttributeReference {
    pub fn new(resource_name: impl Into<String>, attribute_name: impl Into<String>) -> Self {
        Self {
            resource_name: resource_name.into(),
            attribute_name: attribute_name.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GetAtt {
    #[serde(rename = "Fn::GetAtt")]
    get_att: (String, String),
}

impl From<GetAtt> for AttributeReference {
    fn from(value: GetAtt) -> Self {
        let (resource_name, attribute_name) = value.get_att;
        Self {
            resource_name,
            attribute_name,
        }
    }
}

impl From<AttributeReference> for GetAtt {
    fn from(value: AttributeReference) -> Self {
        Self {
            get_att: (value.resource_name, value.attribute_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarOrReference<T> {
    Literal(T),
    Reference(AttributeReference),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateMachineResource {
    #[serde(rename = "DefinitionUri")]
    pub definition_uri: String,
    #[serde(
        rename = "DefinitionSubstitutions",
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub substitutions: BTreeMap<String, ScalarOrReference<String>>,
}

impl StateMachineResource {
    pub fn new(definition_uri: impl Into<String>) -> Self {
        Self {
            definition_uri: definition_uri.into(),
            substitutions: BTreeMap::new(),
        }
    }

    pub fn with_substitution(
        mut self,
        token: impl Into<String>,
        value: ScalarOrReference<String>,
    ) -> Self {
        self.substitutions.insert(token.into(), value);
        self
    }
}

fn null_as_empty<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, ScalarOrReference<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<BTreeMap<String, ScalarOrReference<String>>>::deserialize(deserializer)
        .map(Option::unwrap_or_default)
}

/// Recognized function resource. Its properties are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FunctionResource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    StateMachine(StateMachineResource),
    Function(FunctionResource),
}

impl ResolvedResource {
    pub fn type_name(&self) -> &'static str {
        match self {
            ResolvedResource::StateMachine(_) => STATE_MACHINE_TYPE,
            ResolvedResource::Function(_) => FUNCTION_TYPE,
        }
    }

    pub fn as_state_machine(&self) -> Option<&StateMachineResource> {
        match self {
            ResolvedResource::StateMachine(state_machine) => Some(state_machine),
            ResolvedResource::Function(_) => None,
        }
    }
}

/// Narrowed template. `resources: None` and an empty map mean the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Template {
    pub resources: Option<BTreeMap<String, ResolvedResource>>,
}

impl Template {
    pub fn from_resources(resources: BTreeMap<String, ResolvedResource>) -> Self {
        Self {
            resources: Some(resources),
        }
    }

    pub fn resource(&self, name: &str) -> Option<&ResolvedResource> {
        self.resources.as_ref().and_then(|resources| resources.get(name))
    }

    pub fn contains_resource(&self, name: &str) -> bool {
        self.resource(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.resources
            .as_ref()
            .map_or(true, |resources| resources.is_empty())
    }

    pub fn state_machines(&self) -> impl Iterator<Item = (&str, &StateMachineResource)> {
        self.resources
            .iter()
            .flatten()
            .filter_map(|(name, resource)| {
                resource
                    .as_state_machine()
                    .map(|state_machine| (name.as_str(), state_machine))
            })
    }
}

#[cfg(test)]
#[path = "template_test.rs"]
mod tests;
