mod identity;
mod target;

pub use identity::{
    ArnPolicy, DEFAULT_ACCOUNT_ID, DEFAULT_PARTITION, DEFAULT_REGION, DEFAULT_SERVICE,
};
pub use target::{resolve_target, ResolvedTarget, TargetError};
