use std::fmt;

use nom::bytes::complete::tag;
use nom::character::complete::{line_ending, u32};
use nom::combinator::map;
use nom::multi::{many0, many1};
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use super::common_parsers::*;
use super::error::DbcParseError;

/// A named, repeated grouping of signals within one message.
///
/// ```text
/// signal_group = 'SIG_GROUP_' message_id signal_group_name repetitions ':' {signal_name} ';' ;
/// ```
///
/// example:
///
/// ```text
/// SIG_GROUP_ 123 GroupName 1 : Signal1 Signal2 Signal3;
/// ```
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SignalGroup {
    pub message_id: u32,
    pub name: String,
    pub repetitions: u32,
    pub signal_names: Vec<String>,
}

impl fmt::Display for SignalGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIG_GROUP_ {} {} {} : {};",
            self.message_id,
            self.name,
            self.repetitions,
            self.signal_names.join(" ")
        )
    }
}

fn parser_repetitions(input: &str) -> IResult<&str, u32, DbcParseError> {
    u32.parse(input)
}

pub fn parser_signal_group(input: &str) -> IResult<&str, SignalGroup, DbcParseError> {
    let res = map(
        (
            multispacey(tag("SIG_GROUP_")),
            spacey(parser_message_id),
            spacey(dbc_identifier),
            spacey(parser_repetitions),
            spacey(tag(":")),
            many1(spacey(parser_signal_name)),
            spacey(tag(";")),
            many0(line_ending),
        ),
        |(_, message_id, name, repetitions, _, signal_names, _, _)| SignalGroup {
            message_id,
            name: name.to_string(),
            repetitions,
            signal_names: signal_names.into_iter().map(str::to_string).collect(),
        },
    )
    .parse(input);

    match res {
        Ok((remain, val)) => {
            log::info!("parse signal group: {:?}", val);
            Ok((remain, val))
        }
        Err(e) => {
            log::trace!("parse signal group failed, e = {:?}", e);
            Err(nom::Err::Error(DbcParseError::BadSignalGroup))
        }
    }
}
