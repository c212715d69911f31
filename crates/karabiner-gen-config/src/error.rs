use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to serialize configuration document")]
    #[diagnostic(code(karabiner_gen::config::serialize))]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write configuration document: {0}")]
    #[diagnostic(
        code(karabiner_gen::config::write),
        help("the output stream was closed before the document was written")
    )]
    Io(#[from] std::io::Error),
}
