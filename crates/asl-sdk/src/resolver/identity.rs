use serde::{Deserialize, Serialize};

pub const DEFAULT_PARTITION: &str = "aws";
pub const DEFAULT_SERVICE: &str = "lambda";
pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_ACCOUNT_ID: &str = "123456789012";

/// Fixed identity used to synthesize ARNs for `Fn::GetAtt [X, Arn]`.
///
/// No account lookup happens; the values are placeholders unless overridden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArnPolicy {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
}

impl Default for ArnPolicy {
    fn default() -> Self {
        Self {
            partition: DEFAULT_PARTITION.to_string(),
            service: DEFAULT_SERVICE.to_string(),
            region: DEFAULT_REGION.to_string(),
            account_id: DEFAULT_ACCOUNT_ID.to_string(),
        }
    }
}

impl ArnPolicy {
    pub fn function_arn(&self, name: &str) -> String {
        format!(
            "arn:{}:{}:{}:{}:function:{name}",
            self.partition, self.service, self.region, self.account_id
        )
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
