use std::collections::HashMap;

use super::attribute::AttributeValue;

/// A control unit (`BU_`) taking part in the network.
#[derive(PartialEq, Debug, Clone)]
pub struct DbcNode {
    pub name: String,
    pub description: Option<String>,
    pub attribute_values: HashMap<String, AttributeValue>,
}

impl DbcNode {
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            attribute_values: HashMap::new(),
        }
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute_values.contains_key(name)
    }

    pub fn get_attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attribute_values.get(name)
    }
}
