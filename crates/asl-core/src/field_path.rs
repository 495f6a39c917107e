use std::fmt::{Display, Formatter};

/// Location of a node inside a parsed template or config document.
///
/// Rendered JSONPath-style: `$.Resources.Machine.Type`. Keys that are not
/// plain identifiers (CloudFormation keys such as `Fn::GetAtt`) are rendered
/// in bracket form: `$.Foo["Fn::GetAtt"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    keys: Vec<String>,
}

impl FieldPath {
    pub fn root() -> Self {
        Self { keys: Vec::new() }
    }

    pub fn push_key(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.push_key(key);
        next
    }
}

impl Default for FieldPath {
    fn default() -> Self {
        Self::root()
    }
}

fn is_plain_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "$")?;
        for key in &self.keys {
            if is_plain_key(key) {
                write!(f, ".{key}")?;
            } else {
                write!(f, "[{key:?}]")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "field_path_test.rs"]
mod tests;
