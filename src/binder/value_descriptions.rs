use crate::ast::env_var_value_descriptions::EnvironmentVariableValueDescriptions;
use crate::ast::signal_value_descriptions::SignalValueDescriptions;
use crate::error::DbcError;
use crate::model::DbcFile;

/// Binds every `VAL_` statement that targets a signal, attaching the
/// `(value, label)` pairs in declaration order.
pub(super) fn bind_signal_value_descriptions(
    dbc: &mut DbcFile,
    descriptions: Vec<SignalValueDescriptions>,
) -> Result<(), DbcError> {
    for vd in descriptions {
        let message = dbc
            .get_message_mut(vd.message_id)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "message",
                name: vd.message_id.to_string(),
            })?;
        let signal = message
            .get_signal_mut(&vd.signal_name)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "signal",
                name: vd.signal_name.clone(),
            })?;
        signal.value_descriptions = vd
            .value_descriptions
            .values
            .into_iter()
            .map(|item| (item.num, item.str.0))
            .collect();
    }
    Ok(())
}

/// Binds every `VAL_` statement that targets an environment variable.
pub(super) fn bind_env_var_value_descriptions(
    dbc: &mut DbcFile,
    descriptions: Vec<EnvironmentVariableValueDescriptions>,
) -> Result<(), DbcError> {
    for vd in descriptions {
        let ev = dbc
            .get_environment_variable_mut(&vd.env_var_name)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "environment variable",
                name: vd.env_var_name.clone(),
            })?;
        ev.value_descriptions = vd
            .value_descriptions
            .values
            .into_iter()
            .map(|item| (item.num, item.str.0))
            .collect();
    }
    Ok(())
}
