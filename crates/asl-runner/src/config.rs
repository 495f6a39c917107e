use asl_core::{FieldPath, StructuredIssue};
use asl_sdk::ArnPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const RUNNER_CONFIG_SCHEMA: &str = "asl-runner/0.0.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub identity: IdentityConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            identity: IdentityConfig::default(),
        }
    }
}

/// Overrides for the placeholder identity used in synthesized ARNs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IdentityConfig {
    #[serde(default)]
    pub partition: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
}

impl RunnerConfig {
    pub fn arn_policy(&self) -> ArnPolicy {
        let defaults = ArnPolicy::default();
        let identity = &self.identity;
        ArnPolicy {
            partition: identity.partition.clone().unwrap_or(defaults.partition),
            service: identity.service.clone().unwrap_or(defaults.service),
            region: identity.region.clone().unwrap_or(defaults.region),
            account_id: identity.account_id.clone().unwrap_or(defaults.account_id),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", render_issues(.0))]
    Validation(Vec<StructuredIssue>),
}

fn render_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(RunnerConfigError::Parse)?;
    let config: RunnerConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("json decode error: {error}"))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("yaml decode error: {error}"))
        })?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| RunnerConfigError::Parse(error.to_string()))?,
    };

    let mut issues = validate_runner_config(&config);
    StructuredIssue::sort_stable(&mut issues);
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    tracing::debug!(path = %path.display(), "loaded runner config");
    Ok(config)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::<StructuredIssue>::new();
    if config.schema != RUNNER_CONFIG_SCHEMA {
        issues.push(config_issue(
            "runner.config.schema",
            FieldPath::root().key("schema"),
            format!(
                "unsupported runner config schema `{}` (expected `{RUNNER_CONFIG_SCHEMA}`)",
                config.schema
            ),
        ));
    }

    let identity = &config.identity;
    let identity_path = FieldPath::root().key("identity");
    let fields = [
        ("partition", &identity.partition),
        ("service", &identity.service),
        ("region", &identity.region),
        ("account_id", &identity.account_id),
    ];
    for (name, value) in fields {
        let Some(value) = value else {
            continue;
        };
        let path = identity_path.key(name);
        if value.trim().is_empty() {
            issues.push(config_issue(
                "runner.config.identity.empty",
                path,
                format!("identity.{name} must not be empty"),
            ));
            continue;
        }
        if value.contains(':') {
            issues.push(config_issue(
                "runner.config.identity.delimiter",
                path,
                format!("identity.{name} must not contain `:`"),
            ));
        }
    }

    if let Some(account_id) = &identity.account_id {
        if !account_id.is_empty()
            && !(account_id.len() == 12 && account_id.chars().all(|c| c.is_ascii_digit()))
        {
            issues.push(config_issue(
                "runner.config.identity.account_id",
                identity_path.key("account_id"),
                format!("identity.account_id `{account_id}` must be 12 digits"),
            ));
        }
    }

    issues
}

fn config_issue(reference: &str, field_path: FieldPath, message: String) -> StructuredIssue {
    StructuredIssue::error("config_error", field_path, message, reference)
}

fn default_runner_schema() -> String {
    RUNNER_CONFIG_SCHEMA.to_string()
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find("${") {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let var_start = start + 2;
        let Some(end_offset) = input[var_start..].find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let end = var_start + end_offset;
        let key = &input[var_start..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
