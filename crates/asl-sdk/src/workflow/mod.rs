mod expand;
mod load;

pub use expand::{expand_string, expand_workflow, Expander, ARN_ATTRIBUTE};
pub use load::{
    directory_base_url, load_workflow, resolve_definition_location, template_base_url,
    WorkflowLoadError,
};
