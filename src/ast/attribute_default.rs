use std::fmt;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::map;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use super::attribute::parser_attribute_name;
use super::char_string::{parser_char_string, CharString};
use super::common_parsers::*;
use super::error::DbcParseError;

/// The value carried by an attribute default (`BA_DEF_DEF_`) or attribute
/// value (`BA_`) statement. `INT`/`HEX`/`FLOAT`-typed attributes decode as
/// `Double`; `STRING`/`ENUM`-typed attributes decode as `String`.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub enum AttributeValue {
    Double(f64),
    String(CharString),
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Double(v) => {
                if (v.fract() - 0.0).abs() < f64::EPSILON {
                    write!(f, "{}", *v as i64)
                } else {
                    write!(f, "{v}")
                }
            }
            AttributeValue::String(s) => write!(f, "\"{s}\""),
        }
    }
}

pub fn parser_attribute_value(input: &str) -> IResult<&str, AttributeValue, DbcParseError> {
    alt((
        map(number_value, AttributeValue::Double),
        map(parser_char_string, AttributeValue::String),
    ))
    .parse(input)
}

/// `BA_DEF_DEF_ "<attr_name>" <value> ;` sets the default value of a
/// previously declared attribute schema. `BA_DEF_DEF_REL_` uses identical
/// syntax for relation-scoped schemas.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct AttributeDefault {
    pub attribute_name: String,
    pub attribute_value: AttributeValue,
}

impl fmt::Display for AttributeDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BA_DEF_DEF_ \"{}\" {};",
            self.attribute_name, self.attribute_value
        )
    }
}

pub fn parser_attribute_default(input: &str) -> IResult<&str, AttributeDefault, DbcParseError> {
    let res = map(
        (
            multispacey(alt((tag("BA_DEF_DEF_REL_"), tag("BA_DEF_DEF_")))),
            multispacey(parser_attribute_name),
            multispacey(parser_attribute_value),
            multispacey(tag(";")),
        ),
        |(_, attribute_name, attribute_value, _)| AttributeDefault {
            attribute_name: attribute_name.to_string(),
            attribute_value,
        },
    )
    .parse(input);

    match res {
        Ok((remain, value)) => {
            log::info!("parse attribute default: {:?}", value);
            Ok((remain, value))
        }
        Err(e) => {
            log::trace!("parse attribute default failed, e = {:?}", e);
            Err(nom::Err::Error(DbcParseError::BadAttributeDefinitionDefault))
        }
    }
}
