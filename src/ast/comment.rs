use std::fmt;

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::combinator::map;
use nom::{IResult, Parser};

use super::char_string::{parser_char_string, CharString};
use super::common_parsers::{
    multispacey, parser_env_var_name, parser_message_id, parser_node_name, parser_signal_name,
};
use super::error::DbcParseError;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct NetworkComment {
    pub comment: CharString,
}

impl fmt::Display for NetworkComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"CM_ "{}";"#, self.comment)
    }
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct NodeComment {
    pub node_name: String,
    pub comment: CharString,
}

impl fmt::Display for NodeComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"CM_ BU_ {} "{}";"#, self.node_name, self.comment)
    }
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct MessageComment {
    pub message_id: u32,
    pub comment: CharString,
}

impl fmt::Display for MessageComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, r#"CM_ BO_ {} "{}";"#, self.message_id, self.comment)
    }
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SignalComment {
    pub message_id: u32,
    pub signal_name: String,
    pub comment: CharString,
}

impl fmt::Display for SignalComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"CM_ SG_ {} {} "{}";"#,
            self.message_id, self.signal_name, self.comment
        )
    }
}

#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentVariableComment {
    pub environment_variable_name: String,
    pub comment: CharString,
}

impl fmt::Display for EnvironmentVariableComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"CM_ EV_ {} "{}";"#,
            self.environment_variable_name, self.comment
        )
    }
}

/// The comment section contains the object comments. For each object having a
/// comment, an entry with the object's type identification is defined in this section.
///
/// ```text
/// comments = {comment} ;
/// comment = 'CM_' (char_string |
/// 'BU_' node_name char_string |
/// 'BO_' message_id char_string |
/// 'SG_' message_id signal_name char_string |
/// 'EV_' env_var_name char_string)
/// ';' ;
/// ```
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub enum Comment {
    Network(NetworkComment),
    Node(NodeComment),
    Message(MessageComment),
    Signal(SignalComment),
    EnvironmentVariable(EnvironmentVariableComment),
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comment::Network(comment) => write!(f, "{comment}"),
            Comment::Node(comment) => write!(f, "{comment}"),
            Comment::Message(comment) => write!(f, "{comment}"),
            Comment::Signal(comment) => write!(f, "{comment}"),
            Comment::EnvironmentVariable(comment) => write!(f, "{comment}"),
        }
    }
}

pub fn parser_comment(input: &str) -> IResult<&str, Comment, DbcParseError> {
    let res = alt((
        parser_network_comment,
        parser_node_comment,
        parser_message_comment,
        parser_signal_comment,
        parser_environment_variable_comment,
    ))
    .parse(input);

    match res {
        Ok((remain, comment)) => {
            log::info!("parse comment: {comment:?}");
            Ok((remain, comment))
        }
        Err(e) => {
            log::trace!("parse comment failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadComment))
        }
    }
}

pub fn parser_network_comment(input: &str) -> IResult<&str, Comment, DbcParseError> {
    let res = map(
        (
            multispacey(tag("CM_")),
            multispacey(parser_char_string),
            multispacey(tag(";")),
        ),
        |(_, comment, _)| NetworkComment { comment },
    )
    .parse(input);

    match res {
        Ok((remain, comment)) => {
            log::info!("parse network comment: {comment:?}");
            Ok((remain, Comment::Network(comment)))
        }
        Err(e) => {
            log::trace!("parse network comment failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadNetworkComment))
        }
    }
}

pub fn parser_node_comment(input: &str) -> IResult<&str, Comment, DbcParseError> {
    let res = map(
        (
            multispacey(tag("CM_")),
            multispacey(tag("BU_")),
            multispacey(parser_node_name),
            multispacey(parser_char_string),
            multispacey(tag(";")),
        ),
        |(_, _, node_name, comment, _)| NodeComment {
            node_name: node_name.to_string(),
            comment,
        },
    )
    .parse(input);

    match res {
        Ok((remain, comment)) => {
            log::info!("parse node comment: {comment:?}");
            Ok((remain, Comment::Node(comment)))
        }
        Err(e) => {
            log::trace!("parse node comment failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadNodeComment))
        }
    }
}

pub fn parser_message_comment(input: &str) -> IResult<&str, Comment, DbcParseError> {
    let res = map(
        (
            multispacey(tag("CM_")),
            multispacey(tag("BO_")),
            multispacey(parser_message_id),
            multispacey(parser_char_string),
            multispacey(tag(";")),
        ),
        |(_, _, message_id, comment, _)| MessageComment {
            message_id,
            comment,
        },
    )
    .parse(input);

    match res {
        Ok((remain, comment)) => {
            log::info!("parse message comment: {comment:?}");
            Ok((remain, Comment::Message(comment)))
        }
        Err(e) => {
            log::trace!("parse message comment failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadMessageComment))
        }
    }
}

pub fn parser_signal_comment(input: &str) -> IResult<&str, Comment, DbcParseError> {
    let res = map(
        (
            multispacey(tag("CM_")),
            multispacey(tag("SG_")),
            multispacey(parser_message_id),
            multispacey(parser_signal_name),
            multispacey(parser_char_string),
            multispacey(tag(";")),
        ),
        |(_, _, message_id, signal_name, comment, _)| SignalComment {
            message_id,
            signal_name: signal_name.to_string(),
            comment,
        },
    )
    .parse(input);

    match res {
        Ok((remain, comment)) => {
            log::info!("parse signal comment: {comment:?}");
            Ok((remain, Comment::Signal(comment)))
        }
        Err(e) => {
            log::trace!("parse signal comment failed, e = {e:?}");
            Err(nom::Err::Error(DbcParseError::BadSignalComment))
        }
    }
}

pub fn parser_environment_variable_comment(input: &str) -> IResult<&str, Comment, DbcParseError> {
    let res = map(
        (
            multispacey(tag("CM_")),
            multispacey(tag("EV_")),
            multispacey(parser_env_var_name),
            multispacey(parser_char_string),
            multispacey(tag(";")),
        ),
        |(_, _, environment_variable_name, comment, _)| EnvironmentVariableComment {
            environment_variable_name: environment_variable_name.to_string(),
            comment,
        },
    )
    .parse(input);

    match res {
        Ok((remain, comment)) => {
            log::info!("parse environment variable comment: {comment:?}");
            Ok((remain, Comment::EnvironmentVariable(comment)))
        }
        Err(e) => {
            log::trace!("parse environment variable comment failed, e = {e:?}");
            Err(nom::Err::Error(
                DbcParseError::BadEnvironmentVariableComment,
            ))
        }
    }
}
