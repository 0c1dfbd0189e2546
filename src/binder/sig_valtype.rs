use crate::ast::sig_valtype::SignalExtendedValueType;
use crate::error::DbcError;
use crate::model::{DbcFile, SignalValueType};

/// Binds every `SIG_VALTYPE_` override. Code `0` means "no override" (the
/// signal keeps the signed/unsigned type the base grammar gave it); `1`
/// and `2` switch it to IEEE float/double. Any other code is meaningless.
pub(super) fn bind_signal_extended_value_types(
    dbc: &mut DbcFile,
    overrides: Vec<SignalExtendedValueType>,
) -> Result<(), DbcError> {
    for over in overrides {
        let message = dbc
            .get_message_mut(over.message_id)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "message",
                name: over.message_id.to_string(),
            })?;
        let signal = message
            .get_signal_mut(&over.signal_name)
            .ok_or_else(|| DbcError::UnresolvedReference {
                kind: "signal",
                name: over.signal_name.clone(),
            })?;

        signal.value_type = match over.value_type_code {
            0 => signal.value_type,
            1 => SignalValueType::Float32,
            2 => SignalValueType::Float64,
            other => {
                return Err(DbcError::UnexpectedToken {
                    field: "signal extended value type",
                    token: other.to_string(),
                })
            }
        };
    }
    Ok(())
}
