use crate::field_path::FieldPath;
use std::fmt::{Display, Formatter};

/// A validation problem located in a document. Every issue is fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredIssue {
    pub kind: String,
    pub field_path: FieldPath,
    pub message: String,
    pub reference: String,
}

impl StructuredIssue {
    pub fn error(
        kind: impl Into<String>,
        field_path: FieldPath,
        message: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            field_path,
            message: message.into(),
            reference: reference.into(),
        }
    }

    pub fn sort_stable(issues: &mut [Self]) {
        issues.sort_by(|left, right| {
            (&left.kind, &left.field_path, &left.message).cmp(&(
                &right.kind,
                &right.field_path,
                &right.message,
            ))
        });
    }
}

impl Display for StructuredIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} ({})", self.field_path, self.message, self.reference)
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
