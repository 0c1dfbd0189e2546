use std::fmt;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::line_ending;
use nom::combinator::map;
use nom::multi::many0;
use nom::{IResult, Parser};
use serde::{Deserialize, Serialize};

use super::common_parsers::{
    dbc_identifier, multispacey, parser_message_id, parser_node_name, spacey, unsigned_integer,
};
use super::error::DbcParseError;
use super::signal::{parser_signal, Signal};

/// Message definition.
/// Format: `BO_ <CAN-ID> <MessageName>: <MessageSize> <SendingNode>`
/// `MessageSize` in bytes.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct MessageHeader {
    /// The message's CAN-ID. The CAN-ID has to be unique within the DBC file. If the
    /// most significant bit of the CAN-ID is set, the ID is an extended CAN ID.
    /// The extended CAN ID can be determined by masking out the most significant bit
    /// with the mask 0x7FFFFFFF.
    pub id: u32,

    /// The names defined in this section have to be unique within the set of messages.
    pub name: String,

    /// The `message_size` specifies the size of the message in bytes.
    pub size: u32,

    /// The transmitter name specifies the name of the node transmitting the message.
    /// The sender name has to be defined in the set of node names in the node section.
    /// If the massage shall have no sender, the string `Vector__XXX` has to be given
    /// here.
    pub transmitter: String,
}

/// The message section defines the names of all frames in the cluster as well as their
/// properties and the signals transferred on the frames.
///
/// ```text
/// messages = {message} ;
/// message = BO_ message_id message_name ':' message_size transmitter {signal} ;
/// message_id = unsigned_integer ;
/// message_name = DBC_identifier ;
/// message_size = unsigned_integer ;
/// transmitter = node_name | 'Vector__XXX' ;
/// ```
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub header: MessageHeader,
    pub signals: Vec<Signal>,
}

impl fmt::Display for MessageHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BO_ {} {}: {} {}",
            self.id, self.name, self.size, self.transmitter
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        for signal in &self.signals {
            writeln!(f, "\t{signal}")?;
        }
        Ok(())
    }
}

fn parser_message_name(input: &str) -> IResult<&str, &str, DbcParseError> {
    dbc_identifier(input)
}

fn parser_message_size(input: &str) -> IResult<&str, u32, DbcParseError> {
    unsigned_integer(input)
}

fn parser_transmitter(input: &str) -> IResult<&str, &str, DbcParseError> {
    alt((parser_node_name, tag("Vector__XXX"))).parse(input)
}

fn parser_message_header(input: &str) -> IResult<&str, MessageHeader, DbcParseError> {
    let res = map(
        (
            multispacey(tag("BO_")),
            spacey(parser_message_id),
            spacey(parser_message_name),
            spacey(tag(":")),
            spacey(parser_message_size),
            spacey(parser_transmitter),
        ),
        |(_, id, message_name, _, size, sending_node_name)| MessageHeader {
            id,
            name: String::from(message_name),
            size,
            transmitter: String::from(sending_node_name),
        },
    )
    .parse(input);

    match res {
        Ok((remain, header)) => {
            log::info!("parse message header: {header:?}");
            Ok((remain, header))
        }
        Err(e) => {
            log::trace!("parse message header failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadMessageHeader))
        }
    }
}

pub fn parser_dbc_message(input: &str) -> IResult<&str, Message, DbcParseError> {
    map(
        (
            parser_message_header,
            many0(parser_signal),
            many0(line_ending),
        ),
        |(header, signals, _)| Message { header, signals },
    )
    .parse(input)
}
