mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::{Cli, OutputFormat, RenderCommand};
pub use config::{
    load_runner_config, validate_runner_config, IdentityConfig, RunnerConfig, RunnerConfigError,
    RUNNER_CONFIG_SCHEMA,
};
pub use io::{
    read_template_from_reader, read_template_source, TemplateReadError, TemplateSource,
    STDIN_MARKER,
};
pub use logging::{init_tracing, log_filter};
pub use run::{execute_render, RunnerError};
