use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum WorkflowLoadError {
    #[error("template location must be an absolute path: {path}")]
    InvalidBase { path: String },
    #[error("invalid definition location `{location}` relative to `{base}`: {source}")]
    InvalidLocation {
        base: String,
        location: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported definition location `{location}`: only local files can be loaded")]
    UnsupportedScheme { location: String },
    #[error("read workflow definition failed `{location}`: {source}")]
    Read {
        location: String,
        #[source]
        source: std::io::Error,
    },
    #[error("workflow definition is not valid JSON `{location}`: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Base URL for resolving definitions relative to a template file.
pub fn template_base_url(template_path: &Path) -> Result<Url, WorkflowLoadError> {
    Url::from_file_path(template_path).map_err(|_| WorkflowLoadError::InvalidBase {
        path: template_path.display().to_string(),
    })
}

/// Base URL for templates that have no file of their own (read from stdin).
pub fn directory_base_url(directory: &Path) -> Result<Url, WorkflowLoadError> {
    Url::from_directory_path(directory).map_err(|_| WorkflowLoadError::InvalidBase {
        path: directory.display().to_string(),
    })
}

/// RFC 3986 reference resolution: absolute URIs win, absolute paths replace
/// the base path, relative paths resolve against the base's directory.
pub fn resolve_definition_location(
    base: &Url,
    definition_uri: &str,
) -> Result<Url, WorkflowLoadError> {
    base.join(definition_uri)
        .map_err(|source| WorkflowLoadError::InvalidLocation {
            base: base.to_string(),
            location: definition_uri.to_string(),
            source,
        })
}

pub fn load_workflow(base: &Url, definition_uri: &str) -> Result<Value, WorkflowLoadError> {
    let location = resolve_definition_location(base, definition_uri)?;
    let path = location_path(&location)?;
    tracing::debug!(location = %location, "loading workflow definition");

    let text = fs::read_to_string(&path).map_err(|source| WorkflowLoadError::Read {
        location: location.to_string(),
        source,
    })?;
    serde_json::from_str::<Value>(text.as_str()).map_err(|source| WorkflowLoadError::Parse {
        location: location.to_string(),
        source,
    })
}

fn location_path(location: &Url) -> Result<PathBuf, WorkflowLoadError> {
    if location.scheme() != "file" {
        return Err(WorkflowLoadError::UnsupportedScheme {
            location: location.to_string(),
        });
    }
    location
        .to_file_path()
        .map_err(|_| WorkflowLoadError::UnsupportedScheme {
            location: location.to_string(),
        })
}

#[cfg(test)]
#[path = "load_test.rs"]
mod tests;
