pub mod documents;
pub mod narrow;
pub mod parse;
pub mod resolver;
pub mod workflow;

pub use documents::{
    AttributeReference, FunctionResource, RawResource, ResolvedResource, ScalarOrReference,
    StateMachineResource, Template, FUNCTION_TYPE, STATE_MACHINE_TYPE,
};
pub use narrow::{narrow_resource, narrow_resources, narrow_template, ResourceVariant};
pub use parse::{
    normalize_yaml_value, parse_template, parse_template_value, TemplateError, TemplateFormat,
};
pub use resolver::{
    resolve_target, ArnPolicy, ResolvedTarget, TargetError, DEFAULT_ACCOUNT_ID,
    DEFAULT_PARTITION, DEFAULT_REGION, DEFAULT_SERVICE,
};
pub use workflow::{
    directory_base_url, expand_string, expand_workflow, load_workflow,
    resolve_definition_location, template_base_url, Expander, WorkflowLoadError, ARN_ATTRIBUTE,
};
