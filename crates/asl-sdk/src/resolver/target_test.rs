use super::{resolve_target, TargetError};
use crate::documents::{FunctionResource, ResolvedResource, StateMachineResource, Template};
use std::collections::BTreeMap;

fn template(entries: &[(&str, ResolvedResource)]) -> Template {
    Template::from_resources(
        entries
            .iter()
            .map(|(name, resource)| (name.to_string(), resource.clone()))
            .collect::<BTreeMap<_, _>>(),
    )
}

fn machine(uri: &str) -> ResolvedResource {
    ResolvedResource::StateMachine(StateMachineResource::new(uri))
}

#[test]
fn absent_or_empty_resources_fail_as_empty_template() {
    assert_eq!(
        resolve_target(&Template::default(), None),
        Err(TargetError::EmptyTemplate)
    );
    assert_eq!(
        resolve_target(&template(&[]), Some("Machine")),
        Err(TargetError::EmptyTemplate)
    );
}

#[test]
fn single_state_machine_is_selected_implicitly() {
    let template = template(&[
        ("Lambda", ResolvedResource::Function(FunctionResource)),
        ("Machine", machine("a.asl.json")),
    ]);

    let resolved = resolve_target(&template, None).expect("must resolve");
    assert_eq!(resolved.name, "Machine");
    assert_eq!(resolved.state_machine.definition_uri, "a.asl.json");
}

#[test]
fn only_functions_fail_with_no_state_machine() {
    let template = template(&[("Lambda", ResolvedResource::Function(FunctionResource))]);
    assert_eq!(
        resolve_target(&template, None),
        Err(TargetError::NoStateMachine)
    );
}

#[test]
fn multiple_state_machines_are_ambiguous_and_listed() {
    let template = template(&[
        ("Second", machine("b.asl.json")),
        ("First", machine("a.asl.json")),
        ("Lambda", ResolvedResource::Function(FunctionResource)),
    ]);

    let error = resolve_target(&template, None).expect_err("must be ambiguous");
    assert_eq!(
        error,
        TargetError::AmbiguousTarget {
            candidates: vec!["First".to_string(), "Second".to_string()],
        }
    );
    assert_eq!(
        error.to_string(),
        "template has multiple state machines, pass one of: First, Second"
    );
}

#[test]
fn explicit_target_disambiguates() {
    let template = template(&[
        ("First", machine("a.asl.json")),
        ("Second", machine("b.asl.json")),
    ]);

    let resolved = resolve_target(&template, Some("Second")).expect("must resolve");
    assert_eq!(resolved.name, "Second");
    assert_eq!(resolved.state_machine.definition_uri, "b.asl.json");
}

#[test]
fn explicit_target_must_exist() {
    let template = template(&[("First", machine("a.asl.json"))]);
    assert_eq!(
        resolve_target(&template, Some("Missing")),
        Err(TargetError::TargetNotFound {
            target: "Missing".to_string()
        })
    );
}

#[test]
fn explicit_target_must_be_a_state_machine() {
    let template = template(&[
        ("First", machine("a.asl.json")),
        ("Lambda", ResolvedResource::Function(FunctionResource)),
    ]);
    let error = resolve_target(&template, Some("Lambda")).expect_err("must fail");
    assert_eq!(error.to_string(), "state machine not found: Lambda");
}
