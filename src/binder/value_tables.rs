use crate::ast::value_tables::ValueTable;
use crate::error::DbcError;
use crate::model::DbcFile;

use super::entities;

/// Binds every `VAL_TABLE_` declaration, preserving `(value, label)` order
/// including duplicates.
pub(super) fn bind_value_tables(dbc: &mut DbcFile, tables: Option<Vec<ValueTable>>) -> Result<(), DbcError> {
    for table in tables.into_iter().flatten() {
        let name = table.name.clone();
        dbc.add_value_table(entities::build_value_table(table))
            .map_err(|name| DbcError::DuplicateEntity {
                kind: "value table",
                name,
            })?;
        log::info!("bound value table: {name}");
    }
    Ok(())
}
