use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "asl-runner")]
#[command(about = "Render a SAM state machine definition with its DefinitionSubstitutions applied")]
pub struct Cli {
    #[command(flatten)]
    pub render: RenderCommand,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Only log errors.
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Debug, Clone, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

#[derive(Debug, Clone, clap::Args)]
pub struct RenderCommand {
    /// Template path, or `-` to read the template from stdin.
    pub template: PathBuf,
    /// Target state machine. Can be omitted when the template has only one.
    pub target: Option<String>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
