use asl_sdk::{directory_base_url, template_base_url, WorkflowLoadError};
use std::fs;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Template path that means "read the template from stdin".
pub const STDIN_MARKER: &str = "-";

/// Fully buffered template text plus the location definitions resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSource {
    pub text: String,
    pub base: Url,
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateReadError {
    #[error("read template failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("read template from stdin failed: {0}")]
    ReadStdin(#[source] std::io::Error),
    #[error("resolve template location failed `{path}`: {source}")]
    Locate {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Base(#[from] WorkflowLoadError),
}

pub fn read_template_source(path: &Path) -> Result<TemplateSource, TemplateReadError> {
    if path.as_os_str() == STDIN_MARKER {
        let cwd = std::env::current_dir().map_err(|source| TemplateReadError::Locate {
            path: STDIN_MARKER.to_string(),
            source,
        })?;
        let stdin = std::io::stdin();
        return read_template_from_reader(stdin.lock(), cwd.as_path());
    }

    let absolute = std::path::absolute(path).map_err(|source| TemplateReadError::Locate {
        path: path.display().to_string(),
        source,
    })?;
    let text = fs::read_to_string(&absolute).map_err(|source| TemplateReadError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %absolute.display(), bytes = text.len(), "read template");
    Ok(TemplateSource {
        text,
        base: template_base_url(absolute.as_path())?,
    })
}

/// Reads a template from a stream; relative definitions resolve against `base_dir`.
pub fn read_template_from_reader(
    mut reader: impl Read,
    base_dir: &Path,
) -> Result<TemplateSource, TemplateReadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(TemplateReadError::ReadStdin)?;
    tracing::debug!(bytes = text.len(), "read template from stream");
    Ok(TemplateSource {
        text,
        base: directory_base_url(base_dir)?,
    })
}

#[cfg(test)]
#[path = "read_document_test.rs"]
mod tests;
