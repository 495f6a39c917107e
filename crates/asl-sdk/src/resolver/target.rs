use crate::documents::{StateMachineResource, Template};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTarget<'a> {
    pub name: &'a str,
    pub state_machine: &'a StateMachineResource,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("template has no resources")]
    EmptyTemplate,
    #[error("template has no state machine resource")]
    NoStateMachine,
    #[error("template has multiple state machines, pass one of: {}", .candidates.join(", "))]
    AmbiguousTarget { candidates: Vec<String> },
    #[error("state machine not found: {target}")]
    TargetNotFound { target: String },
}

/// Picks the state machine to render.
///
/// An explicit target must name a state machine. Without one, the template
/// must contain exactly one state machine; ambiguity is always an error.
pub fn resolve_target<'a>(
    template: &'a Template,
    target: Option<&str>,
) -> Result<ResolvedTarget<'a>, TargetError> {
    let resources = match &template.resources {
        Some(resources) if !resources.is_empty() => resources,
        _ => return Err(TargetError::EmptyTemplate),
    };

    if let Some(target) = target {
        return resources
            .get_key_value(target)
            .and_then(|(name, resource)| {
                resource.as_state_machine().map(|state_machine| ResolvedTarget {
                    name: name.as_str(),
                    state_machine,
                })
            })
            .ok_or_else(|| TargetError::TargetNotFound {
                target: target.to_string(),
            });
    }

    let mut candidates = template.state_machines();
    match (candidates.next(), candidates.next()) {
        (None, _) => Err(TargetError::NoStateMachine),
        (Some((name, state_machine)), None) => Ok(ResolvedTarget {
            name,
            state_machine,
        }),
        (Some(_), Some(_)) => Err(TargetError::AmbiguousTarget {
            candidates: template
                .state_machines()
                .map(|(name, _)| name.to_string())
                .collect(),
        }),
    }
}

#[cfg(test)]
#[path = "target_test.rs"]
mod tests;
