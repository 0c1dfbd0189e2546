//! Pure constructors: given one AST subtree, build the corresponding
//! single object-model entity. These functions never touch [`DbcFile`] —
//! the passes in the sibling modules own insertion, indexing, and
//! cross-reference resolution.

use crate::ast;
use crate::error::DbcError;
use crate::model::{
    AttributeObjectType, AttributeValue, AttributeValueType, DbcAttribute, DbcEnvironmentVariable,
    DbcNode, DbcSignal, DbcSignalGroup, DbcValueTable, EnvironmentVariableAccessType,
    EnvironmentVariableType, SignalByteOrder, SignalValueType,
};

pub(super) fn build_node(name: String) -> DbcNode {
    DbcNode::new(name)
}

pub(super) fn build_value_table(table: ast::value_tables::ValueTable) -> DbcValueTable {
    DbcValueTable {
        name: table.name,
        values: table
            .value_descriptions
            .values
            .into_iter()
            .map(|item| (item.num, item.str.0))
            .collect(),
    }
}

pub(super) fn build_signal(signal: ast::signal::Signal) -> DbcSignal {
    let byte_order = match signal.byte_order {
        ast::signal::ByteOrder::LittleEndian => SignalByteOrder::LittleEndian,
        ast::signal::ByteOrder::BigEndian => SignalByteOrder::BigEndian,
    };
    let value_type = match signal.value_type {
        ast::signal::ValueType::Unsigned => SignalValueType::Unsigned,
        ast::signal::ValueType::Signed => SignalValueType::Signed,
    };

    DbcSignal {
        name: signal.name,
        start_bit: signal.start_bit,
        size: signal.size,
        byte_order,
        value_type,
        factor: signal.factor,
        offset: signal.offset,
        minimum: signal.min,
        maximum: signal.max,
        unit: signal.unit.map(|u| u.0).unwrap_or_default(),
        receivers: signal.receivers.unwrap_or_default(),
        description: None,
        attribute_values: Default::default(),
        node_attribute_values: Default::default(),
        value_descriptions: Vec::new(),
    }
}

pub(super) fn build_environment_variable(
    ev: ast::env_var::EnvironmentVariable,
    env_type: EnvironmentVariableType,
    access_type: EnvironmentVariableAccessType,
) -> DbcEnvironmentVariable {
    DbcEnvironmentVariable {
        name: ev.env_var_name,
        env_type,
        minimum: ev.minimum,
        maximum: ev.maximum,
        unit: ev.unit,
        initial_value: ev.initial_value,
        id: ev.ev_id,
        access_type,
        access_nodes: ev.access_nodes,
        description: None,
        data_size: None,
        attribute_values: Default::default(),
        value_descriptions: Vec::new(),
    }
}

pub(super) fn build_signal_group(group: ast::signal_group::SignalGroup) -> DbcSignalGroup {
    DbcSignalGroup {
        name: group.name,
        message_id: group.message_id,
        repetitions: group.repetitions,
        signal_names: group.signal_names,
    }
}

pub(super) fn build_attribute_definition(def: ast::attribute_definition::AttributeDefinition) -> DbcAttribute {
    use ast::attribute_definition::AttributeDefinition as Def;

    let (name, object_type, value_type) = match def {
        Def::Network(a) => (a.attribute_name, AttributeObjectType::Global, a.attribute_value_type),
        Def::Node(a) => (a.attribute_name, AttributeObjectType::Node, a.attribute_value_type),
        Def::Message(a) => (a.attribute_name, AttributeObjectType::Message, a.attribute_value_type),
        Def::Signal(a) => (a.attribute_name, AttributeObjectType::Signal, a.attribute_value_type),
        Def::EnvironmentVariable(a) => (
            a.attribute_name,
            AttributeObjectType::EnvironmentVariable,
            a.attribute_value_type,
        ),
        Def::ControlUnitEnvironmentVariable(a) => (
            a.attribute_name,
            AttributeObjectType::NodeEnvironmentVariable,
            a.attribute_value_type,
        ),
        Def::NodeTxMessage(a) => (a.attribute_name, AttributeObjectType::NodeMessage, a.attribute_value_type),
        Def::NodeMappedRxSignal(a) => (
            a.attribute_name,
            AttributeObjectType::NodeSignal,
            a.attribute_value_type,
        ),
    };

    DbcAttribute::new(name, object_type, build_attribute_value_type(value_type))
}

fn build_attribute_value_type(value_type: ast::attribute_definition::AttributeValueType) -> AttributeValueType {
    use ast::attribute_definition::AttributeValueType as AstType;

    match value_type {
        AstType::Integer(t) => AttributeValueType::Integer {
            minimum: t.minimum,
            maximum: t.maximum,
        },
        AstType::Hex(t) => AttributeValueType::Hex {
            minimum: t.minimum,
            maximum: t.maximum,
        },
        AstType::Float(t) => AttributeValueType::Float {
            minimum: t.minimum,
            maximum: t.maximum,
        },
        AstType::String(_) => AttributeValueType::String,
        AstType::Enum(t) => AttributeValueType::Enum {
            labels: t.values.into_iter().map(|s| s.0).collect(),
        },
    }
}

/// Decodes a raw `BA_DEF_DEF_`/`BA_`/`BA_REL_` literal against the schema's
/// declared `value_type`. `INT`/`HEX` decode to `Integer`, `FLOAT` to
/// `Float`, `STRING`/`ENUM` both decode to the literal's unquoted text —
/// `ENUM` assignments carry an index into the schema's label set in most
/// real files, but nothing here resolves it against the label list; the raw
/// text is kept as-is, mirroring the schema's own "unquoted string" rule.
pub(super) fn decode_attribute_value(
    value_type: &AttributeValueType,
    raw: ast::attribute_default::AttributeValue,
    attribute_name: &str,
) -> Result<AttributeValue, DbcError> {
    use ast::attribute_default::AttributeValue as AstValue;

    match (value_type, raw) {
        (AttributeValueType::Integer { .. } | AttributeValueType::Hex { .. }, AstValue::Double(v)) => {
            Ok(AttributeValue::Integer(v as i64))
        }
        (AttributeValueType::Float { .. }, AstValue::Double(v)) => Ok(AttributeValue::Float(v)),
        (AttributeValueType::String | AttributeValueType::Enum { .. }, AstValue::String(s)) => {
            Ok(AttributeValue::String(s.0))
        }
        (AttributeValueType::String | AttributeValueType::Enum { .. }, AstValue::Double(v)) => {
            Ok(AttributeValue::String(format_double_literal(v)))
        }
        (value_type, _) => Err(DbcError::TypeMismatch {
            attribute: attribute_name.to_string(),
            expected: value_type_label(value_type),
            found: "mismatched literal",
        }),
    }
}

fn format_double_literal(v: f64) -> String {
    if (v.fract() - 0.0).abs() < f64::EPSILON {
        (v as i64).to_string()
    } else {
        v.to_string()
    }
}

fn value_type_label(value_type: &AttributeValueType) -> &'static str {
    match value_type {
        AttributeValueType::Integer { .. } => "INT",
        AttributeValueType::Hex { .. } => "HEX",
        AttributeValueType::Float { .. } => "FLOAT",
        AttributeValueType::Enum { .. } => "ENUM",
        AttributeValueType::String => "STRING",
    }
}
