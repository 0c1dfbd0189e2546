use std::collections::HashMap;

use super::attribute::{AttributeValue, DbcAttribute};
use super::env_var::DbcEnvironmentVariable;
use super::message::DbcMessage;
use super::node::DbcNode;
use super::value_table::DbcValueTable;

/// The fully bound object model produced from one DBC source file.
///
/// Every collection keeps declaration order in its `Vec` and offers O(1)
/// lookup by identity key through a side `HashMap<Key, usize>` index, so
/// iteration order matches the source text while `get_*`/`has_*` stay
/// constant-time. Cross-references between entities (message transmitter,
/// signal receivers, per-node attribute values, ...) are plain name/id
/// keys rather than shared pointers, since nothing here needs a cycle.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcFile {
    pub version: String,
    nodes: Vec<DbcNode>,
    nodes_by_name: HashMap<String, usize>,
    messages: Vec<DbcMessage>,
    messages_by_id: HashMap<u32, usize>,
    value_tables: Vec<DbcValueTable>,
    value_tables_by_name: HashMap<String, usize>,
    environment_variables: Vec<DbcEnvironmentVariable>,
    environment_variables_by_name: HashMap<String, usize>,
    attribute_definitions: Vec<DbcAttribute>,
    attribute_definitions_by_name: HashMap<String, usize>,
    pub(crate) attribute_values: HashMap<String, AttributeValue>,
}

impl Default for DbcFile {
    fn default() -> Self {
        Self::new()
    }
}

impl DbcFile {
    pub fn new() -> Self {
        Self {
            version: "N/A".to_string(),
            nodes: Vec::new(),
            nodes_by_name: HashMap::new(),
            messages: Vec::new(),
            messages_by_id: HashMap::new(),
            value_tables: Vec::new(),
            value_tables_by_name: HashMap::new(),
            environment_variables: Vec::new(),
            environment_variables_by_name: HashMap::new(),
            attribute_definitions: Vec::new(),
            attribute_definitions_by_name: HashMap::new(),
            attribute_values: HashMap::new(),
        }
    }

    pub(crate) fn add_node(&mut self, node: DbcNode) -> Result<(), String> {
        if self.nodes_by_name.contains_key(&node.name) {
            return Err(node.name);
        }
        self.nodes_by_name.insert(node.name.clone(), self.nodes.len());
        self.nodes.push(node);
        Ok(())
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes_by_name.contains_key(name)
    }

    pub fn get_node(&self, name: &str) -> Option<&DbcNode> {
        self.nodes_by_name.get(name).map(|&i| &self.nodes[i])
    }

    pub(crate) fn get_node_mut(&mut self, name: &str) -> Option<&mut DbcNode> {
        let index = *self.nodes_by_name.get(name)?;
        Some(&mut self.nodes[index])
    }

    pub fn nodes(&self) -> &[DbcNode] {
        &self.nodes
    }

    pub(crate) fn add_message(&mut self, message: DbcMessage) -> Result<(), u32> {
        if self.messages_by_id.contains_key(&message.id) {
            return Err(message.id);
        }
        self.messages_by_id.insert(message.id, self.messages.len());
        self.messages.push(message);
        Ok(())
    }

    pub fn has_message(&self, id: u32) -> bool {
        self.messages_by_id.contains_key(&id)
    }

    pub fn get_message(&self, id: u32) -> Option<&DbcMessage> {
        self.messages_by_id.get(&id).map(|&i| &self.messages[i])
    }

    pub(crate) fn get_message_mut(&mut self, id: u32) -> Option<&mut DbcMessage> {
        let index = *self.messages_by_id.get(&id)?;
        Some(&mut self.messages[index])
    }

    pub fn messages(&self) -> &[DbcMessage] {
        &self.messages
    }

    pub(crate) fn add_value_table(&mut self, value_table: DbcValueTable) -> Result<(), String> {
        if self.value_tables_by_name.contains_key(&value_table.name) {
            return Err(value_table.name);
        }
        self.value_tables_by_name
            .insert(value_table.name.clone(), self.value_tables.len());
        self.value_tables.push(value_table);
        Ok(())
    }

    pub fn has_value_table(&self, name: &str) -> bool {
        self.value_tables_by_name.contains_key(name)
    }

    pub fn get_value_table(&self, name: &str) -> Option<&DbcValueTable> {
        self.value_tables_by_name.get(name).map(|&i| &self.value_tables[i])
    }

    pub fn value_tables(&self) -> &[DbcValueTable] {
        &self.value_tables
    }

    pub(crate) fn add_environment_variable(
        &mut self,
        environment_variable: DbcEnvironmentVariable,
    ) -> Result<(), String> {
        if self
            .environment_variables_by_name
            .contains_key(&environment_variable.name)
        {
            return Err(environment_variable.name);
        }
        self.environment_variables_by_name.insert(
            environment_variable.name.clone(),
            self.environment_variables.len(),
        );
        self.environment_variables.push(environment_variable);
        Ok(())
    }

    pub fn has_environment_variable(&self, name: &str) -> bool {
        self.environment_variables_by_name.contains_key(name)
    }

    pub fn get_environment_variable(&self, name: &str) -> Option<&DbcEnvironmentVariable> {
        self.environment_variables_by_name
            .get(name)
            .map(|&i| &self.environment_variables[i])
    }

    pub(crate) fn get_environment_variable_mut(&mut self, name: &str) -> Option<&mut DbcEnvironmentVariable> {
        let index = *self.environment_variables_by_name.get(name)?;
        Some(&mut self.environment_variables[index])
    }

    pub fn environment_variables(&self) -> &[DbcEnvironmentVariable] {
        &self.environment_variables
    }

    pub(crate) fn add_attribute_definition(&mut self, attribute: DbcAttribute) -> Result<(), String> {
        if self.attribute_definitions_by_name.contains_key(&attribute.name) {
            return Err(attribute.name);
        }
        self.attribute_definitions_by_name
            .insert(attribute.name.clone(), self.attribute_definitions.len());
        self.attribute_definitions.push(attribute);
        Ok(())
    }

    pub fn has_attribute_definition(&self, name: &str) -> bool {
        self.attribute_definitions_by_name.contains_key(name)
    }

    pub fn get_attribute_definition(&self, name: &str) -> Option<&DbcAttribute> {
        self.attribute_definitions_by_name
            .get(name)
            .map(|&i| &self.attribute_definitions[i])
    }

    pub(crate) fn get_attribute_definition_mut(&mut self, name: &str) -> Option<&mut DbcAttribute> {
        let index = *self.attribute_definitions_by_name.get(name)?;
        Some(&mut self.attribute_definitions[index])
    }

    pub fn attribute_definitions(&self) -> &[DbcAttribute] {
        &self.attribute_definitions
    }

    pub fn has_attribute_value(&self, name: &str) -> bool {
        self.attribute_values.contains_key(name)
    }

    pub fn get_attribute_value(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute_values.get(name)
    }
}
