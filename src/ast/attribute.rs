use nom::bytes::complete::tag;
use nom::sequence::delimited;
use nom::{IResult, Parser};

use super::common_parsers::dbc_identifier;
use super::error::DbcParseError;

pub fn parser_attribute_name(input: &str) -> IResult<&str, &str, DbcParseError> {
    delimited(tag("\""), dbc_identifier, tag("\"")).parse(input)
}
