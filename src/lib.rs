//! Parser and semantic binder for CAN network DBC files.
//!
//! [`ast`] turns DBC source text into a syntax-only parse tree with `nom`.
//! [`binder`] walks that tree through a fixed sequence of passes, resolving
//! cross-references and building the [`model::DbcFile`] object model that
//! [`parse_text`] and [`parse_dbc`] return.

pub mod ast;
mod binder;
pub mod error;
pub mod model;

use std::fs;
use std::path::Path;

pub use error::DbcError;
pub use model::DbcFile;

/// Parses and binds a DBC file already loaded as a string.
pub fn parse_text(source: &str) -> Result<DbcFile, DbcError> {
    let network_ast = ast::parse_dbc(source)?;
    binder::bind(network_ast)
}

/// Reads a DBC file from disk and parses and binds it.
pub fn parse_dbc(path: impl AsRef<Path>) -> Result<DbcFile, DbcError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|source| DbcError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_text(&source)
}
