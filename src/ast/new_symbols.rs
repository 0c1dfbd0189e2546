use std::fmt;

use nom::bytes::complete::tag;
use nom::character::complete::{line_ending, space0};
use nom::combinator::map;
use nom::multi::many0;
use nom::{IResult, Parser};

use super::common_parsers::{dbc_object_name, multispacey};
use super::error::DbcParseError;
use serde::{Deserialize, Serialize};

/// New Symbols, Names used throughout the DBC file.
///
/// Format:
///
/// ```text
/// NS_:
///     BS_
///     CM_
///     ...
/// ```
/// */
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct NewSymbols(pub Vec<String>);

impl fmt::Display for NewSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NS_:")?;
        for name in &self.0 {
            writeln!(f, "\t{name}")?;
        }
        Ok(())
    }
}

fn parser_one_line_new_symbols(input: &str) -> IResult<&str, String, DbcParseError> {
    map(
        (space0, dbc_object_name, space0, line_ending),
        |(_, name, _, _)| name.to_owned(),
    )
    .parse(input)
}

pub fn parser_new_symbols(input: &str) -> IResult<&str, NewSymbols, DbcParseError> {
    let res = map(
        (
            multispacey(tag("NS_")),
            multispacey(tag(":")),
            multispacey(many0(parser_one_line_new_symbols)),
        ),
        |(_, _, names)| NewSymbols(names),
    )
    .parse(input);
    match res {
        Ok((remain, names)) => {
            log::info!("parse names: {:?}", names.0);
            Ok((remain, names))
        }
        Err(e) => {
            log::trace!("parse names failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadNames))
        }
    }
}
