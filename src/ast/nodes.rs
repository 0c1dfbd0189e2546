use super::common_parsers::*;
use super::error::DbcParseError;
use nom::bytes::complete::tag;
use nom::combinator::map;
use nom::multi::many0;
use nom::sequence::tuple;
use nom::IResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The node section defines the names of all participating nodes (`BU_`).
///
/// ```text
/// nodes = 'BU_:' {node_name} ;
/// ```
///
/// Format: `BU_: <node_name>*`
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Nodes(pub Vec<String>);

impl fmt::Display for Nodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BU_: {}", self.0.join(" "))
    }
}

pub fn parser_nodes(input: &str) -> IResult<&str, Nodes, DbcParseError> {
    let res = map(
        tuple((
            multispacey(tag("BU_")),
            spacey(tag(":")),
            many0(spacey(parser_node_name)),
        )),
        |(_, _, names)| Nodes(names.into_iter().map(|s| s.to_string()).collect()),
    )(input);

    match res {
        Ok((remain, nodes)) => {
            log::info!("parse nodes: {:?}", nodes);
            Ok((remain, nodes))
        }
        Err(e) => {
            log::trace!("parse nodes failed, e = {:?}", e);
            Err(nom::Err::Error(DbcParseError::BadCanNodes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_nodes_01() {
        assert_eq!(
            parser_nodes("BU_: ABS DRS_MM5_10"),
            Ok((
                "",
                Nodes(vec!["ABS".to_string(), "DRS_MM5_10".to_string()])
            ))
        );
    }

    #[test]
    fn test_parser_nodes_empty() {
        assert_eq!(parser_nodes("BU_:"), Ok(("", Nodes(vec![]))));
    }

    #[test]
    fn test_nodes_string_01() {
        assert_eq!(
            Nodes(vec!["ABS".to_string(), "DRS_MM5_10".to_string()]).to_string(),
            "BU_: ABS DRS_MM5_10"
        );
    }
}
