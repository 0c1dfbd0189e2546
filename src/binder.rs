//! The semantic binder: a fixed-order pipeline of passes over a
//! [`crate::ast::NetworkAst`] parse tree that populates a [`DbcFile`],
//! resolving cross-references and enforcing uniqueness, referential
//! integrity, and type coherence along the way.
//!
//! Pass order is a correctness requirement, not a style choice — later
//! passes resolve names that earlier passes declare, and running them out
//! of order would turn a well-formed file into a string of
//! `UnresolvedReference` errors. The order mirrors the data flow: version,
//! nodes, value tables, messages+signals, environment variables,
//! envvar-data overrides, comments, attributes (definitions, then
//! defaults, then values), value descriptions, signal extended value
//! types, signal groups.

mod attributes;
mod comments;
mod entities;
mod env_vars;
mod messages;
mod nodes;
mod sig_valtype;
mod signal_groups;
mod value_descriptions;
mod value_tables;

use crate::ast::NetworkAst;
use crate::error::DbcError;
use crate::model::DbcFile;

/// Sentinel meaning "no node" wherever a node name is expected.
pub(super) const VECTOR_XXX: &str = "Vector__XXX";

pub(super) fn bind(ast: NetworkAst) -> Result<DbcFile, DbcError> {
    let mut dbc = DbcFile::new();

    if let Some(version) = ast.version {
        dbc.version = version.0 .0;
    }

    nodes::bind_nodes(&mut dbc, ast.nodes)?;
    value_tables::bind_value_tables(&mut dbc, ast.value_tables)?;
    messages::bind_messages(&mut dbc, ast.messages)?;
    env_vars::bind_environment_variables(&mut dbc, ast.env_vars)?;
    env_vars::bind_env_var_data(&mut dbc, ast.env_vars_data)?;
    comments::bind_comments(&mut dbc, ast.comments)?;
    attributes::bind_attribute_definitions(&mut dbc, ast.attribute_definitions)?;
    attributes::bind_attribute_defaults(&mut dbc, ast.attribute_defaults)?;
    attributes::bind_attribute_values(&mut dbc, ast.attribute_values)?;
    value_descriptions::bind_signal_value_descriptions(&mut dbc, ast.signal_value_descriptions)?;
    value_descriptions::bind_env_var_value_descriptions(&mut dbc, ast.env_var_value_descriptions)?;
    sig_valtype::bind_signal_extended_value_types(&mut dbc, ast.signal_extended_value_types)?;
    signal_groups::bind_signal_groups(&mut dbc, ast.signal_groups)?;

    Ok(dbc)
}
