pub mod field_path;
pub mod issues;

pub use field_path::FieldPath;
pub use issues::StructuredIssue;
