use crate::documents::{ScalarOrReference, StateMachineResource, Template};
use crate::resolver::ArnPolicy;
use serde_json::{Map, Value};

/// The only `Fn::GetAtt` attribute that can be resolved.
pub const ARN_ATTRIBUTE: &str = "Arn";

/// Expands `${token}` placeholders using one state machine's
/// `DefinitionSubstitutions`.
#[derive(Debug, Clone, Copy)]
pub struct Expander<'a> {
    state_machine: &'a StateMachineResource,
    template: &'a Template,
    policy: &'a ArnPolicy,
}

impl<'a> Expander<'a> {
    pub fn new(
        state_machine: &'a StateMachineResource,
        template: &'a Template,
        policy: &'a ArnPolicy,
    ) -> Self {
        Self {
            state_machine,
            template,
            policy,
        }
    }

    /// Rebuilds `value` with every string leaf expanded. Object keys are kept
    /// as they are.
    pub fn expand_value(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.expand_str(text)),
            Value::Array(items) => {
                Value::Array(items.iter().map(|item| self.expand_value(item)).collect())
            }
            Value::Object(object) => {
                let mut out = Map::with_capacity(object.len());
                for (key, child) in object {
                    out.insert(key.clone(), self.expand_value(child));
                }
                Value::Object(out)
            }
            Value::Null | Value::Bool(_) | Value::Number(_) => value.clone(),
        }
    }

    /// Left-to-right, non-overlapping scan. Unresolved placeholders and an
    /// unterminated `${` are copied through untouched.
    pub fn expand_str(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut cursor = 0;
        while let Some(start_offset) = input[cursor..].find("${") {
            let start = cursor + start_offset;
            let token_start = start + 2;
            let Some(end_offset) = input[token_start..].find('}') else {
                break;
            };
            let end = token_start + end_offset;
            out.push_str(&input[cursor..start]);
            match self.resolve_token(&input[token_start..end]) {
                Some(value) => out.push_str(value.as_str()),
                None => out.push_str(&input[start..=end]),
            }
            cursor = end + 1;
        }
        out.push_str(&input[cursor..]);
        out
    }

    pub fn resolve_token(&self, token: &str) -> Option<String> {
        let Some(entry) = self.state_machine.substitutions.get(token) else {
            tracing::trace!(token, "no substitution for placeholder");
            return None;
        };
        match entry {
            ScalarOrReference::Literal(value) => Some(value.clone()),
            ScalarOrReference::Reference(reference) => {
                if reference.attribute_name != ARN_ATTRIBUTE {
                    tracing::trace!(
                        token,
                        attribute = %reference.attribute_name,
                        "unsupported Fn::GetAtt attribute"
                    );
                    return None;
                }
                if !self.template.contains_resource(reference.resource_name.as_str()) {
                    tracing::trace!(
                        token,
                        resource = %reference.resource_name,
                        "Fn::GetAtt target is not in the template"
                    );
                    return None;
                }
                Some(self.policy.function_arn(token))
            }
        }
    }
}

pub fn expand_workflow(
    workflow: &Value,
    state_machine: &StateMachineResource,
    template: &Template,
    policy: &ArnPolicy,
) -> Value {
    Expander::new(state_machine, template, policy).expand_value(workflow)
}

pub fn expand_string(
    input: &str,
    state_machine: &StateMachineResource,
    template: &Template,
    policy: &ArnPolicy,
) -> String {
    Expander::new(state_machine, template, policy).expand_str(input)
}

#[cfg(test)]
#[path = "expand_test.rs"]
mod tests;
