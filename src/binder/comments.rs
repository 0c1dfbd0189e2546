use crate::ast::comment::Comment;
use crate::error::DbcError;
use crate::model::DbcFile;

/// Binds every `CM_` statement. A file-level comment overrides
/// `DbcFile.version` rather than populating a separate field — this is
/// the source's own behavior, preserved here rather than corrected, since
/// existing files depend on it. Every other comment form sets the
/// `description` of the entity it names.
pub(super) fn bind_comments(dbc: &mut DbcFile, comments: Vec<Comment>) -> Result<(), DbcError> {
    for comment in comments {
        match comment {
            Comment::Network(c) => {
                dbc.version = c.comment.0;
            }
            Comment::Node(c) => {
                let node = dbc
                    .get_node_mut(&c.node_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "node",
                        name: c.node_name.clone(),
                    })?;
                node.description = Some(c.comment.0);
            }
            Comment::Message(c) => {
                let message = dbc
                    .get_message_mut(c.message_id)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "message",
                        name: c.message_id.to_string(),
                    })?;
                message.description = Some(c.comment.0);
            }
            Comment::Signal(c) => {
                let message = dbc
                    .get_message_mut(c.message_id)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "message",
                        name: c.message_id.to_string(),
                    })?;
                let signal = message
                    .get_signal_mut(&c.signal_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "signal",
                        name: c.signal_name.clone(),
                    })?;
                signal.description = Some(c.comment.0);
            }
            Comment::EnvironmentVariable(c) => {
                let ev = dbc
                    .get_environment_variable_mut(&c.environment_variable_name)
                    .ok_or_else(|| DbcError::UnresolvedReference {
                        kind: "environment variable",
                        name: c.environment_variable_name.clone(),
                    })?;
                ev.description = Some(c.comment.0);
            }
        }
    }
    Ok(())
}
