use crate::ast::message::Message as AstMessage;
use crate::error::DbcError;
use crate::model::{DbcFile, DbcMessage};

use super::entities;
use super::VECTOR_XXX;

/// Binds every `BO_`/`SG_` block, in declaration order. A message's id and
/// each of its signal names must be unique. Nodes are bound in the pass
/// before this one, so a message's transmitter and a signal's receivers are
/// resolved against the node table here; `Vector__XXX` is exempt, meaning
/// "no node".
pub(super) fn bind_messages(dbc: &mut DbcFile, messages: Vec<AstMessage>) -> Result<(), DbcError> {
    for message in messages {
        check_node_reference(dbc, &message.header.transmitter)?;

        let mut dbc_message = DbcMessage::new(
            message.header.id,
            message.header.name.clone(),
            message.header.size,
            message.header.transmitter.clone(),
        );

        for signal in message.signals {
            for receiver in &signal.receivers {
                for node_name in receiver {
                    check_node_reference(dbc, node_name)?;
                }
            }

            dbc_message
                .add_signal(entities::build_signal(signal))
                .map_err(|name| DbcError::DuplicateEntity {
                    kind: "signal",
                    name: format!("{name} (message {})", message.header.id),
                })?;
        }

        let message_id = dbc_message.id;
        dbc.add_message(dbc_message).map_err(|id| DbcError::DuplicateEntity {
            kind: "message",
            name: id.to_string(),
        })?;
        log::info!("bound message: {message_id}");
    }
    Ok(())
}

fn check_node_reference(dbc: &DbcFile, node_name: &str) -> Result<(), DbcError> {
    if node_name == VECTOR_XXX || dbc.has_node(node_name) {
        Ok(())
    } else {
        Err(DbcError::UnresolvedReference {
            kind: "node",
            name: node_name.to_string(),
        })
    }
}
