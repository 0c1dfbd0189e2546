//! The lexical and grammar layer: a `nom` combinator parser that turns raw
//! DBC source text into a [`network_ast::NetworkAst`] parse tree. Every
//! statement family gets its own submodule mirroring the DBC keyword it
//! recognizes; the semantic binder in [`crate::binder`] consumes the tree
//! this module produces.

pub mod attribute;
pub mod attribute_default;
pub mod attribute_definition;
pub mod attribute_value;
pub mod bit_timing;
pub mod char_string;
pub mod comment;
pub mod common_parsers;
pub mod env_var;
pub mod env_var_data;
pub mod env_var_value_descriptions;
pub mod error;
pub mod message;
pub mod network_ast;
pub mod new_symbols;
pub mod nodes;
pub mod sig_valtype;
pub mod signal;
pub mod signal_group;
pub mod signal_value_descriptions;
pub mod value_descriptions;
pub mod value_tables;
pub mod version;

pub use error::DbcParseError;
pub use network_ast::{parse_dbc, NetworkAst};
