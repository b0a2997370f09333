use thiserror::Error;

/// Top-level error type shared by every toolbar crate.
///
/// Style construction and lookup never fail; errors only come from loading
/// configuration or addressing a view node that does not exist.
#[derive(Debug, Error)]
pub enum ToolbarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("unknown view node: {0}")]
    UnknownNode(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = ToolbarError> = std::result::Result<T, E>;
