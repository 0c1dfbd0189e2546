use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::ast::DbcParseError;

/// Errors raised while parsing and binding a DBC file, from the grammar
/// layer up through cross-reference resolution.
#[derive(Error, Debug)]
pub enum DbcError {
    /// The source text did not match the DBC grammar.
    #[error("syntax error: {0}")]
    Syntax(#[from] DbcParseError),

    /// The same identity key (node name, message id, attribute name, ...)
    /// was declared twice.
    #[error("duplicate {kind}: {name}")]
    DuplicateEntity { kind: &'static str, name: String },

    /// A statement referenced a node, message, signal, environment
    /// variable, or attribute definition that was never declared.
    #[error("unresolved reference to {kind} {name}")]
    UnresolvedReference { kind: &'static str, name: String },

    /// A token was recognized by the grammar but is not a value this
    /// field accepts (e.g. an unrecognized `DUMMY_NODE_VECTOR<hex>`).
    #[error("unexpected token for {field}: {token}")]
    UnexpectedToken { field: &'static str, token: String },

    /// An attribute value's literal kind did not match its schema's
    /// declared value type (e.g. a string literal assigned to an `INT`).
    #[error("type mismatch for attribute {attribute}: expected {expected}, found {found}")]
    TypeMismatch {
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The file at `path` could not be read as UTF-8 text.
    #[error("failed to read DBC file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
