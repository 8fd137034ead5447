//! Error type shared by parsing and serialization.

use thiserror::Error;

/// Errors that can occur while parsing or dumping a tree.
#[derive(Debug, Error)]
pub enum Error {
    /// The grammar could not be loaded into the parser.
    #[error("incompatible grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),
    /// The engine produced no tree.
    #[error("parsing failed")]
    ParseFailed,
    /// The output sink rejected a write.
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for treewalk operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
