use crate::ast::env_var::{EnvVarType, EnvironmentVariable as AstEnvironmentVariable};
use crate::ast::env_var_data::EnvironmentVariableData;
use crate::error::DbcError;
use crate::model::{DbcFile, EnvironmentVariableAccessType, EnvironmentVariableType};

use super::entities;
use super::VECTOR_XXX;

/// Binds every `EV_` declaration, decoding its `DUMMY_NODE_VECTOR<hex>`
/// access token into an [`EnvironmentVariableAccessType`]. Any access
/// value outside `{0, 1, 2, 3, 0x8000}` is rejected outright: the format
/// defines no meaning for it, so silently defaulting would hide a
/// malformed file rather than report it. Access-node names that were never
/// declared in `BU_:` are tolerated by creating a stub node for them,
/// rather than failing the whole file.
pub(super) fn bind_environment_variables(
    dbc: &mut DbcFile,
    env_vars: Vec<AstEnvironmentVariable>,
) -> Result<(), DbcError> {
    for ev in env_vars {
        let env_type = match ev.env_var_type {
            EnvVarType::Integer => EnvironmentVariableType::Integer,
            EnvVarType::Float => EnvironmentVariableType::Float,
            EnvVarType::String => EnvironmentVariableType::String,
            EnvVarType::Data => EnvironmentVariableType::Data,
        };
        let access_type = decode_access_type(ev.access_type)?;
        let name = ev.env_var_name.clone();
        let access_nodes = ev.access_nodes.clone();

        let dbc_ev = entities::build_environment_variable(ev, env_type, access_type);
        dbc.add_environment_variable(dbc_ev)
            .map_err(|name| DbcError::DuplicateEntity {
                kind: "environment variable",
                name,
            })?;

        for node_name in access_nodes {
            if node_name != VECTOR_XXX && !dbc.has_node(&node_name) {
                log::warn!("creating stub node {node_name} referenced by environment variable {name} access list");
                let _ = dbc.add_node(entities::build_node(node_name));
            }
        }

        log::info!("bound environment variable: {name}");
    }
    Ok(())
}

fn decode_access_type(raw: u16) -> Result<EnvironmentVariableAccessType, DbcError> {
    match raw {
        0x0000 | 0x8000 => Ok(EnvironmentVariableAccessType::Unrestricted),
        0x0001 => Ok(EnvironmentVariableAccessType::Read),
        0x0002 => Ok(EnvironmentVariableAccessType::Write),
        0x0003 => Ok(EnvironmentVariableAccessType::ReadWrite),
        other => Err(DbcError::UnexpectedToken {
            field: "environment variable access type",
            token: format!("DUMMY_NODE_VECTOR{other:X}"),
        }),
    }
}

/// Binds every `ENVVAR_DATA_` statement, promoting the named variable's
/// type to `Data` and recording its declared size.
pub(super) fn bind_env_var_data(dbc: &mut DbcFile, data: Vec<EnvironmentVariableData>) -> Result<(), DbcError> {
    for d in data {
        let ev = dbc
            .get_environment_variable_mut(&d.env_var_name)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "environment variable",
                name: d.env_var_name.clone(),
            })?;
        ev.env_type = EnvironmentVariableType::Data;
        ev.data_size = Some(d.data_size);
        log::info!("promoted environment variable {} to DATA", d.env_var_name);
    }
    Ok(())
}
