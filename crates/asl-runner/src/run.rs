use crate::cli::{OutputFormat, RenderCommand};
use crate::config::{load_runner_config, RunnerConfig, RunnerConfigError};
use crate::io::{read_template_source, TemplateReadError};
use asl_sdk::{
    expand_workflow, load_workflow, parse_template, resolve_target, TargetError, TemplateError,
    TemplateFormat, WorkflowLoadError,
};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    TemplateRead(#[from] TemplateReadError),
    #[error(transparent)]
    Config(#[from] RunnerConfigError),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error(transparent)]
    Target(#[from] TargetError),
    #[error(transparent)]
    WorkflowLoad(#[from] WorkflowLoadError),
    #[error("json encode failed: {0}")]
    JsonEncode(#[from] serde_json::Error),
}

/// Reads the template, picks the target state machine and returns its
/// expanded definition serialized per `command.format`.
pub fn execute_render(command: &RenderCommand) -> Result<String, RunnerError> {
    let config = match &command.config {
        Some(path) => load_runner_config(path)?,
        None => RunnerConfig::default(),
    };

    let source = read_template_source(command.template.as_path())?;
    let template = parse_template(source.text.as_str(), TemplateFormat::Auto)?;
    let target = resolve_target(&template, command.target.as_deref())?;
    tracing::info!(
        state_machine = target.name,
        definition = %target.state_machine.definition_uri,
        "rendering state machine"
    );

    let workflow = load_workflow(&source.base, target.state_machine.definition_uri.as_str())?;
    let expanded = expand_workflow(
        &workflow,
        target.state_machine,
        &template,
        &config.arn_policy(),
    );
    render_output(&expanded, &command.format)
}

fn render_output(value: &Value, format: &OutputFormat) -> Result<String, RunnerError> {
    let output = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Compact => serde_json::to_string(value)?,
    };
    Ok(output)
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
