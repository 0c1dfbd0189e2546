use crate::ast::signal_group::SignalGroup;
use crate::error::DbcError;
use crate::model::DbcFile;

use super::entities;

/// Binds every `SIG_GROUP_` statement. Each referenced signal must already
/// belong to the named message, and a message may not declare the same
/// group name twice.
pub(super) fn bind_signal_groups(dbc: &mut DbcFile, groups: Vec<SignalGroup>) -> Result<(), DbcError> {
    for group in groups {
        let message_id = group.message_id;
        let name = group.name.clone();

        let message = dbc
            .get_message_mut(message_id)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "message",
                name: message_id.to_string(),
            })?;

        if message.signal_groups.iter().any(|existing| existing.name == name) {
            return Err(DbcError::DuplicateEntity {
                kind: "signal group",
                name: format!("{name} (message {message_id})"),
            });
        }

        for signal_name in &group.signal_names {
            if message.get_signal(signal_name).is_none() {
                return Err(DbcError::UnresolvedReference {
                    kind: "signal",
                    name: signal_name.clone(),
                });
            }
        }

        message.signal_groups.push(entities::build_signal_group(group));
        log::info!("bound signal group: {name} (message {message_id})");
    }
    Ok(())
}
