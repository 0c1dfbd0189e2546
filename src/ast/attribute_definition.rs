use std::fmt;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::map;
use nom::multi::separated_list0;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use super::attribute::parser_attribute_name;
use super::char_string::{parser_char_string, CharString};
use super::common_parsers::*;
use super::error::DbcParseError;

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AttributeIntegerValueType {
    pub minimum: i32,
    pub maximum: i32,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AttributeHexValueType {
    pub minimum: i32,
    pub maximum: i32,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AttributeFloatValueType {
    pub minimum: f64,
    pub maximum: f64,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AttributeStringValueType {}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AttributeEnumValueType {
    pub values: Vec<CharString>,
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub enum AttributeValueType {
    Integer(AttributeIntegerValueType),
    Hex(AttributeHexValueType),
    Float(AttributeFloatValueType),
    String(AttributeStringValueType),
    Enum(AttributeEnumValueType),
}

fn parser_attribute_value_type(input: &str) -> IResult<&str, AttributeValueType, DbcParseError> {
    alt((
        map(
            (
                multispacey(tag("INT")),
                multispacey(signed_integer),
                multispacey(signed_integer),
            ),
            |(_, minimum, maximum)| {
                AttributeValueType::Integer(AttributeIntegerValueType { minimum, maximum })
            },
        ),
        map(
            (
                multispacey(tag("HEX")),
                multispacey(signed_integer),
                multispacey(signed_integer),
            ),
            |(_, minimum, maximum)| {
                AttributeValueType::Hex(AttributeHexValueType { minimum, maximum })
            },
        ),
        map(
            (
                multispacey(tag("FLOAT")),
                multispacey(number_value),
                multispacey(number_value),
            ),
            |(_, minimum, maximum)| {
                AttributeValueType::Float(AttributeFloatValueType { minimum, maximum })
            },
        ),
        map(
            (
                multispacey(tag("ENUM")),
                separated_list0(multispacey(tag(",")), multispacey(parser_char_string)),
            ),
            |(_, values)| AttributeValueType::Enum(AttributeEnumValueType { values }),
        ),
        map(multispacey(tag("STRING")), |_| {
            AttributeValueType::String(AttributeStringValueType {})
        }),
    ))
    .parse(input)
}

macro_rules! attribute_category {
    ($name:ident) => {
        #[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
        pub struct $name {
            pub attribute_name: String,
            pub attribute_value_type: AttributeValueType,
        }
    };
}

attribute_category!(NetworkAttribute);
attribute_category!(NodeAttribute);
attribute_category!(MessageAttribute);
attribute_category!(SignalAttribute);
attribute_category!(EnvironmentVariableAttribute);
attribute_category!(ControlUnitEnvironmentVariableAttribute);
attribute_category!(NodeTxMessageAttribute);
attribute_category!(NodeMappedRxSignalAttribute);

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub enum AttributeDefinition {
    Network(NetworkAttribute),
    Node(NodeAttribute),
    Message(MessageAttribute),
    Signal(SignalAttribute),
    EnvironmentVariable(EnvironmentVariableAttribute),
    ControlUnitEnvironmentVariable(ControlUnitEnvironmentVariableAttribute),
    NodeTxMessage(NodeTxMessageAttribute),
    NodeMappedRxSignal(NodeMappedRxSignalAttribute),
}

fn parser_control_unit_env_var_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_REL_")),
            multispacey(tag("BU_EV_REL_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::ControlUnitEnvironmentVariable(
                ControlUnitEnvironmentVariableAttribute {
                    attribute_name: name.to_string(),
                    attribute_value_type: value_type,
                },
            )
        },
    )
    .parse(input);

    res.map_err(|_| {
        nom::Err::Error(DbcParseError::BadControlUnitEnvironmentVariableAttribute)
    })
}

fn parser_node_tx_message_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_REL_")),
            multispacey(tag("BU_BO_REL_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::NodeTxMessage(NodeTxMessageAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadNodeTxMessageAttribute))
}

fn parser_node_mapped_rx_signal_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_REL_")),
            multispacey(tag("BU_SG_REL_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::NodeMappedRxSignal(NodeMappedRxSignalAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadNodeMappedRxSignalAttribute))
}

fn parser_node_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_")),
            multispacey(tag("BU_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::Node(NodeAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadNodeAttribute))
}

fn parser_message_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_")),
            multispacey(tag("BO_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::Message(MessageAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadMessageAttribute))
}

fn parser_signal_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_")),
            multispacey(tag("SG_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::Signal(SignalAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadSignalAttribute))
}

fn parser_environment_variable_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_")),
            multispacey(tag("EV_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, _, name, value_type, _)| {
            AttributeDefinition::EnvironmentVariable(EnvironmentVariableAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadEnvironmentVariableAttribute))
}

fn parser_network_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BA_DEF_")),
            multispacey(parser_attribute_name),
            parser_attribute_value_type,
            multispacey(tag(";")),
        ),
        |(_, name, value_type, _)| {
            AttributeDefinition::Network(NetworkAttribute {
                attribute_name: name.to_string(),
                attribute_value_type: value_type,
            })
        },
    )
    .parse(input);

    res.map_err(|_| nom::Err::Error(DbcParseError::BadNetworkAttribute))
}

/// `BA_DEF_ [BU_|BO_|SG_|EV_] "<name>" <type_spec> ;` declares an attribute
/// schema for the global scope or one of the four entity scopes. The
/// `BA_DEF_REL_` form declares a schema for a node-to-message, node-to-signal,
/// or node-to-environment-variable relation.
pub fn parser_attribute_definition(
    input: &str,
) -> IResult<&str, AttributeDefinition, DbcParseError> {
    let res = alt((
        parser_control_unit_env_var_attribute_definition,
        parser_node_tx_message_attribute_definition,
        parser_node_mapped_rx_signal_attribute_definition,
        parser_node_attribute_definition,
        parser_message_attribute_definition,
        parser_signal_attribute_definition,
        parser_environment_variable_attribute_definition,
        parser_network_attribute_definition,
    ))
    .parse(input);

    match res {
        Ok((remain, value)) => {
            log::info!("parse attribute definition: {:?}", value);
            Ok((remain, value))
        }
        Err(e) => {
            log::trace!("parse attribute definition failed, e = {:?}", e);
            Err(e)
        }
    }
}
