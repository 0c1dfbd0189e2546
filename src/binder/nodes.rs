use crate::ast::nodes::Nodes;
use crate::error::DbcError;
use crate::model::DbcFile;

use super::entities;

/// Binds the `BU_:` node list, in declaration order.
pub(super) fn bind_nodes(dbc: &mut DbcFile, nodes: Nodes) -> Result<(), DbcError> {
    for name in nodes.0 {
        let node_name = name.clone();
        dbc.add_node(entities::build_node(name))
            .map_err(|name| DbcError::DuplicateEntity { kind: "node", name })?;
        log::info!("bound node: {node_name}");
    }
    Ok(())
}
