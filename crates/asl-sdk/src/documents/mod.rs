mod template;

pub use template::{
    AttributeReference, FunctionResource, RawResource, ResolvedResource, ScalarOrReference,
    StateMachineResource, Template, FUNCTION_TYPE, STATE_MACHINE_TYPE,
};
