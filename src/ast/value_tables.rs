use super::common_parsers::*;
use super::error::DbcParseError;
use super::value_descriptions::{parser_value_descriptions, ValueDescriptions};
use nom::bytes::complete::tag;
use nom::character::complete::line_ending;
use nom::combinator::map;
use nom::combinator::opt;
use nom::multi::many0;
use nom::sequence::tuple;
use nom::IResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The value table section defines the global value tables. The value descriptions in
/// value tables define value encodings for signal raw values. In commonly used DBC
/// files the global value tables aren't used, but the value descriptions are defined for
/// each signal independently.
///
/// ```text
/// value_tables = {value_table} ;
/// value_table = 'VAL_TABLE_' value_table_name {value_description} ';' ;
/// value_table_name = DBC_identifier ;
/// ```
///
/// Format: `VAL_TABLE_ <value_table_name> <value_description>;`
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct ValueTable {
    pub name: String,
    pub value_descriptions: ValueDescriptions,
}

impl fmt::Display for ValueTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VAL_TABLE_ {} {};", self.name, self.value_descriptions)
    }
}

pub fn parser_value_table_name(input: &str) -> IResult<&str, &str, DbcParseError> {
    dbc_object_name(input)
}

pub fn parser_value_table(input: &str) -> IResult<&str, ValueTable, DbcParseError> {
    let res = map(
        tuple((
            multispacey(tag("VAL_TABLE_")),
            spacey(parser_value_table_name),
            spacey(parser_value_descriptions),
            spacey(tag(";")),
            many0(line_ending),
        )),
        |(_, name, value_descriptions, _, _)| ValueTable {
            name: name.to_string(),
            value_descriptions,
        },
    )(input);

    match res {
        Ok((remain, value_table)) => {
            log::info!("parse value table: {}", value_table.name);
            Ok((remain, value_table))
        }
        Err(e) => {
            log::trace!("parse value table failed, e = {:?}", e);
            Err(e)
        }
    }
}

pub fn parser_value_tables(input: &str) -> IResult<&str, Option<Vec<ValueTable>>, DbcParseError> {
    map(opt(many0(parser_value_table)), |values| match values {
        Some(values) => {
            if values.is_empty() {
                None
            } else {
                Some(values)
            }
        }
        None => None,
    })(input)
}
