use std::fmt;

use nom::bytes::complete::tag;
use nom::character::complete::{line_ending, u8};
use nom::combinator::map;
use nom::multi::many0;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use super::common_parsers::*;
use super::error::DbcParseError;

/// Extended value type override for a single signal.
///
/// ```text
/// signal_extended_value_type = 'SIG_VALTYPE_' message_id signal_name ':' signal_extended_value_type_code ';' ;
/// signal_extended_value_type_code = '0' | '1' | '2' ; (* 0=signed/unsigned, 1=IEEE float, 2=IEEE double *)
/// ```
///
/// example:
///
/// ```text
/// SIG_VALTYPE_ 123 SIGNAL11 : 2;
/// ```
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SignalExtendedValueType {
    pub message_id: u32,
    pub signal_name: String,
    pub value_type_code: u8,
}

impl fmt::Display for SignalExtendedValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SIG_VALTYPE_ {} {} : {};",
            self.message_id, self.signal_name, self.value_type_code
        )
    }
}

fn parser_value_type_code(input: &str) -> IResult<&str, u8, DbcParseError> {
    u8.parse(input)
}

pub fn parser_sig_valtype(input: &str) -> IResult<&str, SignalExtendedValueType, DbcParseError> {
    let res = map(
        (
            multispacey(tag("SIG_VALTYPE_")),
            spacey(parser_message_id),
            spacey(parser_signal_name),
            spacey(tag(":")),
            spacey(parser_value_type_code),
            spacey(tag(";")),
            many0(line_ending),
        ),
        |(_, message_id, signal_name, _, value_type_code, _, _)| SignalExtendedValueType {
            message_id,
            signal_name: signal_name.to_string(),
            value_type_code,
        },
    )
    .parse(input);

    match res {
        Ok((remain, val)) => {
            log::info!("parse signal extended value type: {:?}", val);
            Ok((remain, val))
        }
        Err(e) => {
            log::trace!("parse signal extended value type failed, e = {:?}", e);
            Err(nom::Err::Error(DbcParseError::BadSignalExtendedValueType))
        }
    }
}
