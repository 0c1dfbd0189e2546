use crate::ast::attribute_default::AttributeDefault;
use crate::ast::attribute_definition::AttributeDefinition;
use crate::ast::attribute_value::ObjectAttributeValue;
use crate::error::DbcError;
use crate::model::{AttributeValue, DbcFile};

use super::entities;
use super::VECTOR_XXX;

/// Binds every `BA_DEF_`/`BA_DEF_REL_` schema declaration.
pub(super) fn bind_attribute_definitions(dbc: &mut DbcFile, definitions: Vec<AttributeDefinition>) -> Result<(), DbcError> {
    for definition in definitions {
        let attribute = entities::build_attribute_definition(definition);
        let name = attribute.name.clone();
        dbc.add_attribute_definition(attribute)
            .map_err(|name| DbcError::DuplicateEntity {
                kind: "attribute definition",
                name,
            })?;
        log::info!("bound attribute definition: {name}");
    }
    Ok(())
}

/// Binds every `BA_DEF_DEF_`/`BA_DEF_DEF_REL_` default. The named schema
/// must already exist.
pub(super) fn bind_attribute_defaults(dbc: &mut DbcFile, defaults: Vec<AttributeDefault>) -> Result<(), DbcError> {
    for default in defaults {
        let value = decode_against_schema(dbc, &default.attribute_name, default.attribute_value)?;
        dbc.get_attribute_definition_mut(&default.attribute_name)
            .expect("schema existence checked by decode_against_schema")
            .default = Some(value);
        log::info!("bound attribute default: {}", default.attribute_name);
    }
    Ok(())
}

/// Binds every `BA_`/`BA_REL_` value assignment. `BU_BO_REL_` and
/// `BU_EV_REL_` values are logged and discarded rather than stored: the
/// object model has no home for a node/message or node/env-var pair, and
/// this asymmetry (`BU_SG_REL_` values ARE kept) matches source behavior.
pub(super) fn bind_attribute_values(dbc: &mut DbcFile, values: Vec<ObjectAttributeValue>) -> Result<(), DbcError> {
    for value in values {
        match value {
            ObjectAttributeValue::Network(v) => {
                let decoded = decode_against_schema(dbc, &v.attribute_name, v.attribute_value)?;
                dbc.attribute_values.insert(v.attribute_name, decoded);
            }
            ObjectAttributeValue::Node(v) => {
                let decoded = decode_against_schema(dbc, &v.attribute_name, v.attribute_value)?;
                let node = dbc
                    .get_node_mut(&v.node_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "node",
                        name: v.node_name.clone(),
                    })?;
                node.attribute_values.insert(v.attribute_name, decoded);
            }
            ObjectAttributeValue::Message(v) => {
                let decoded = decode_against_schema(dbc, &v.attribute_name, v.attribute_value)?;
                let message = dbc
                    .get_message_mut(v.message_id)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "message",
                        name: v.message_id.to_string(),
                    })?;
                message.attribute_values.insert(v.attribute_name, decoded);
            }
            ObjectAttributeValue::Signal(v) => {
                let decoded = decode_against_schema(dbc, &v.attribute_name, v.attribute_value)?;
                let message = dbc
                    .get_message_mut(v.message_id)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "message",
                        name: v.message_id.to_string(),
                    })?;
                let signal = message
                    .get_signal_mut(&v.signal_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "signal",
                        name: v.signal_name.clone(),
                    })?;
                signal.attribute_values.insert(v.attribute_name, decoded);
            }
            ObjectAttributeValue::EnvironmentVariable(v) => {
                let decoded = decode_against_schema(dbc, &v.attribute_name, v.attribute_value)?;
                let ev = dbc
                    .get_environment_variable_mut(&v.env_var_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "environment variable",
                        name: v.env_var_name.clone(),
                    })?;
                ev.attribute_values.insert(v.attribute_name, decoded);
            }
            ObjectAttributeValue::NodeSignal(v) => {
                let decoded = decode_against_schema(dbc, &v.attribute_name, v.attribute_value)?;
                if v.node_name != VECTOR_XXX && !dbc.has_node(&v.node_name) {
                    return Err(DbcError::UnresolvedReference {
                        kind: "node",
                        name: v.node_name.clone(),
                    });
                }
                let message = dbc
                    .get_message_mut(v.message_id)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "message",
                        name: v.message_id.to_string(),
                    })?;
                let signal = message
                    .get_signal_mut(&v.signal_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "signal",
                        name: v.signal_name.clone(),
                    })?;
                // Duplicate assignments for the same (attribute, node) are
                // tolerated by this insert: last writer wins, including the
                // no-op case of two identical values.
                signal
                    .node_attribute_values
                    .entry(v.attribute_name)
                    .or_default()
                    .insert(v.node_name, decoded);
            }
            ObjectAttributeValue::NodeMessage(v) => {
                log::warn!(
                    "discarding BU_BO_REL_ attribute value: attribute={} node={} message={}",
                    v.attribute_name, v.node_name, v.message_id
                );
            }
            ObjectAttributeValue::NodeEnvironmentVariable(v) => {
                log::warn!(
                    "discarding BU_EV_REL_ attribute value: attribute={} node={} env_var={}",
                    v.attribute_name, v.node_name, v.env_var_name
                );
            }
        }
    }
    Ok(())
}

fn decode_against_schema(
    dbc: &DbcFile,
    attribute_name: &str,
    raw: crate::ast::attribute_default::AttributeValue,
) -> Result<AttributeValue, DbcError> {
    let schema = dbc
        .get_attribute_definition(attribute_name)
        .ok_or_else(|| DbcError::UnresolvedReference {
            kind: "attribute definition",
            name: attribute_name.to_string(),
        })?;
    entities::decode_attribute_value(&schema.value_type, raw, attribute_name)
}
