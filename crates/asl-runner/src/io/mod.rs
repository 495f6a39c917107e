mod read_document;

pub use read_document::{
    read_template_from_reader, read_template_source, TemplateReadError, TemplateSource,
    STDIN_MARKER,
};
