use super::{expand_string, expand_workflow};
use crate::documents::{
    AttributeReference, FunctionResource, ResolvedResource, ScalarOrReference,
    StateMachineResource, Template,
};
use crate::resolver::ArnPolicy;
use serde_json::json;
use std::collections::BTreeMap;

fn literal(value: &str) -> ScalarOrReference<String> {
    ScalarOrReference::Literal(value.to_string())
}

fn get_att(resource: &str, attribute: &str) -> ScalarOrReference<String> {
    ScalarOrReference::Reference(AttributeReference::new(resource, attribute))
}

fn fixture() -> (StateMachineResource, Template) {
    let machine = StateMachineResource::new("machine.asl.json")
        .with_substitution("Foo", get_att("Bar", "Arn"))
        .with_substitution("Baz", literal("x"))
        .with_substitution("Name", get_att("Bar", "Name"))
        .with_substitution("Ghost", get_att("Nowhere", "Arn"))
        .with_substitution("Nested", literal("${Baz}"));
    let template = Template::from_resources(BTreeMap::from([
        (
            "Machine".to_string(),
            ResolvedResource::StateMachine(machine.clone()),
        ),
        ("Bar".to_string(), ResolvedResource::Function(FunctionResource)),
    ]));
    (machine, template)
}

fn expand(input: &str) -> String {
    let (machine, template) = fixture();
    expand_string(input, &machine, &template, &ArnPolicy::default())
}

#[test]
fn end_to_end_mixed_placeholders() {
    let (machine, template) = fixture();
    let expanded = expand_workflow(
        &json!({"a": "${Foo}-${Baz}-${Missing}"}),
        &machine,
        &template,
        &ArnPolicy::default(),
    );
    assert_eq!(
        expanded,
        json!({"a": "arn:aws:lambda:us-east-1:123456789012:function:Foo-x-${Missing}"})
    );
}

#[test]
fn literal_entries_replace_verbatim() {
    assert_eq!(expand("${Baz}"), "x");
    assert_eq!(expand("pre ${Baz} mid ${Baz} post"), "pre x mid x post");
}

#[test]
fn absent_tokens_are_left_literal() {
    assert_eq!(expand("${Missing}"), "${Missing}");
    assert_eq!(expand("${}"), "${}");
    assert_eq!(expand("$Baz {Baz}"), "$Baz {Baz}");
}

#[test]
fn reference_to_existing_resource_uses_token_name() {
    assert_eq!(
        expand("${Foo}"),
        "arn:aws:lambda:us-east-1:123456789012:function:Foo"
    );
}

#[test]
fn unsupported_attribute_or_missing_resource_is_left_literal() {
    assert_eq!(expand("${Name}"), "${Name}");
    assert_eq!(expand("${Ghost}"), "${Ghost}");
}

#[test]
fn substituted_values_are_not_expanded_again() {
    assert_eq!(expand("${Nested}"), "${Baz}");
}

#[test]
fn unterminated_placeholder_is_copied_through() {
    assert_eq!(expand("${Baz}-${Baz"), "x-${Baz");
    assert_eq!(expand("tail ${"), "tail ${");
}

#[test]
fn token_runs_to_first_closing_brace() {
    assert_eq!(expand("${a${Baz}"), "${a${Baz}");
    assert_eq!(expand("${Baz}}"), "x}");
}

#[test]
fn state_machine_without_substitutions_passes_everything_through() {
    let machine = StateMachineResource::new("machine.asl.json");
    let template = Template::from_resources(BTreeMap::from([(
        "Machine".to_string(),
        ResolvedResource::StateMachine(machine.clone()),
    )]));
    let workflow = json!({"Comment": "${Foo}", "States": {}});
    assert_eq!(
        expand_workflow(&workflow, &machine, &template, &ArnPolicy::default()),
        workflow
    );
}

#[test]
fn structure_and_non_string_leaves_are_preserved() {
    let (machine, template) = fixture();
    let workflow = json!({
        "StartAt": "Invoke",
        "TimeoutSeconds": 30,
        "States": {
            "Invoke": {
                "Type": "Task",
                "Resource": "${Foo}",
                "Retry": [{"ErrorEquals": ["States.ALL"], "MaxAttempts": 2, "BackoffRate": 1.5}],
                "Parameters": {"${Baz}": "${Baz}", "flag": true, "none": null},
                "End": true
            }
        }
    });

    let expanded = expand_workflow(&workflow, &machine, &template, &ArnPolicy::default());

    assert_eq!(
        expanded,
        json!({
            "StartAt": "Invoke",
            "TimeoutSeconds": 30,
            "States": {
                "Invoke": {
                    "Type": "Task",
                    "Resource": "arn:aws:lambda:us-east-1:123456789012:function:Foo",
                    "Retry": [{"ErrorEquals": ["States.ALL"], "MaxAttempts": 2, "BackoffRate": 1.5}],
                    "Parameters": {"${Baz}": "x", "flag": true, "none": null},
                    "End": true
                }
            }
        })
    );
}

#[test]
fn input_tree_is_not_modified() {
    let (machine, template) = fixture();
    let workflow = json!(["${Baz}", ["${Foo}"]]);
    let before = workflow.clone();
    let expanded = expand_workflow(&workflow, &machine, &template, &ArnPolicy::default());
    assert_eq!(workflow, before);
    assert_eq!(expanded.as_array().map(Vec::len), Some(2));
}

#[test]
fn custom_policy_changes_synthesized_arn() {
    let (machine, template) = fixture();
    let policy = ArnPolicy {
        region: "eu-west-1".to_string(),
        ..ArnPolicy::default()
    };
    assert_eq!(
        expand_string("${Foo}", &machine, &template, &policy),
        "arn:aws:lambda:eu-west-1:123456789012:function:Foo"
    );
}
